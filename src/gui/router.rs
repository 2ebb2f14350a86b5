// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::series::PAGE,
    &pages::rankings::PAGE,
    &pages::records::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ResourceKind;

    #[test]
    fn one_page_per_kind_in_tab_order() {
        let kinds: Vec<_> = all_pages().iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, ResourceKind::ALL);
    }
}
