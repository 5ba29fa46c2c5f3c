use super::*;

#[test]
fn books_state_defaults() {
    let state = BooksState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn books_state_holds_fetched_items() {
    let state = BooksState {
        items: vec![Book {
            id: 1,
            title: "Dune".to_owned(),
            author: "Frank Herbert".to_owned(),
            status: "reading".to_owned(),
        }],
        loading: false,
        error: None,
    };
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].title, "Dune");
}
