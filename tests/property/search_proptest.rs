//! Property-based tests for the search filter

use proptest::prelude::*;

use userdesk::egui_app::SearchFilter;
use userdesk::shared::User;

fn users() -> impl Strategy<Value = Vec<User>> {
    prop::collection::vec(
        ("[0-9]{1,3}", "[A-Za-z ]{0,10}", "[a-z]{0,8}", "[a-z@.]{0,12}")
            .prop_map(|(id, name, username, email)| User::new(id, name, username, email)),
        0..12,
    )
}

proptest! {
    #[test]
    fn test_empty_term_returns_everything(users in users()) {
        let filter = SearchFilter::new();
        let found: Vec<User> = filter.apply(&users).into_iter().cloned().collect();
        prop_assert_eq!(found, users);
    }

    #[test]
    fn test_filtering_is_idempotent(users in users(), term in "[A-Za-z0-9@. ]{0,4}") {
        let mut filter = SearchFilter::new();
        filter.set_term(term);

        let once: Vec<User> = filter.apply(&users).into_iter().cloned().collect();
        let twice: Vec<User> = filter.apply(&once).into_iter().cloned().collect();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn test_results_keep_collection_order(users in users(), term in "[a-z]{0,2}") {
        let mut filter = SearchFilter::new();
        filter.set_term(term);

        let positions: Vec<usize> = filter
            .apply(&users)
            .into_iter()
            .map(|found| users.iter().position(|u| std::ptr::eq(u, found)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_case_does_not_matter(users in users(), term in "[a-z]{1,3}") {
        let mut lower = SearchFilter::new();
        lower.set_term(term.clone());
        let mut upper = SearchFilter::new();
        upper.set_term(term.to_uppercase());
        prop_assert_eq!(lower.apply(&users), upper.apply(&users));
    }
}
