use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::routes::{RouteTable, CATCH_ALL_PATTERN};
use crate::views::{HomePage, MemoPage, NotFoundPage, RandomSequencePage};

#[component]
pub fn App() -> impl IntoView {
    // One client for the whole app; views pull it from context.
    provide_context(ApiClient::new());
    let table = RouteTable::new();

    view! {
        <Router>
            <div class="app-container">
                <header>
                    <h1>"Memo"</h1>
                    <nav>
                        {table
                            .entries()
                            .iter()
                            .map(|entry| {
                                view! {
                                    <A href=entry.path exact=true>{entry.route.label()}</A>
                                }
                            })
                            .collect_view()}
                    </nav>
                </header>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/rasq/" view=RandomSequencePage/>
                        <Route path="/memo/" view=MemoPage/>
                        <Route path=CATCH_ALL_PATTERN view=NotFoundPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route as AppRoute;

    // The declarative routes above must stay in lockstep with the table.
    #[test]
    fn router_paths_match_the_table() {
        let table = RouteTable::new();
        let paths: Vec<&str> = table.entries().iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/", "/rasq/", "/memo/"]);
        assert_eq!(table.resolve("/"), AppRoute::Home);
        assert_eq!(table.resolve("/rasq/"), AppRoute::RandomSequence);
        assert_eq!(table.resolve("/memo/"), AppRoute::Memo);
        assert_eq!(CATCH_ALL_PATTERN, "/*any");
    }
}
