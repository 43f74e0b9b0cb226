//! Blog-list state for the `/blogs` page.
//!
//! DESIGN
//! ======
//! The page renders exactly one of three shapes (skeletons, empty state,
//! cards); [`BlogsState::view`] picks it so the choice is testable without a
//! DOM.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use content::endpoints::{ROUTE_ADD_BLOG, ROUTE_SIGN_IN};
use content::{ApiError, BlogPost};

/// Placeholder cells shown while the list request is in flight.
pub const SKELETON_CARDS: usize = 6;

pub use content::format::EMPTY_LIST_MESSAGE;
pub const LOAD_FAILED_NOTICE: &str = "We couldn't reach the blog service. Showing no posts for now.";

/// A link target plus its label, chosen by sign-in state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub href: &'static str,
    pub label: &'static str,
    /// Sign-in lives outside the router, so its links need a full navigation.
    pub external: bool,
}

impl CallToAction {
    const fn sign_in_to_write() -> Self {
        Self { href: ROUTE_SIGN_IN, label: "Sign In to Write", external: true }
    }
}

/// Header action above the list.
#[must_use]
pub fn write_cta(signed_in: bool) -> CallToAction {
    if signed_in {
        CallToAction { href: ROUTE_ADD_BLOG, label: "Write a Blog", external: false }
    } else {
        CallToAction::sign_in_to_write()
    }
}

/// Action offered when there are no posts.
#[must_use]
pub fn empty_cta(signed_in: bool) -> CallToAction {
    if signed_in {
        CallToAction { href: ROUTE_ADD_BLOG, label: "Write the First Blog", external: false }
    } else {
        CallToAction::sign_in_to_write()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BlogListView {
    Loading { skeletons: usize },
    Empty { cta: CallToAction, load_failed: bool },
    Cards(Vec<BlogPost>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogsState {
    pub items: Vec<BlogPost>,
    pub loading: bool,
    pub load_failed: bool,
}

impl BlogsState {
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Settle the single list request. A failure leaves the list empty.
    pub fn apply(&mut self, result: Result<Vec<BlogPost>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.load_failed = false;
            }
            Err(_) => {
                self.items.clear();
                self.load_failed = true;
            }
        }
    }

    #[must_use]
    pub fn view(&self, signed_in: bool) -> BlogListView {
        if self.loading {
            BlogListView::Loading { skeletons: SKELETON_CARDS }
        } else if self.items.is_empty() {
            BlogListView::Empty { cta: empty_cta(signed_in), load_failed: self.load_failed }
        } else {
            BlogListView::Cards(self.items.clone())
        }
    }
}
