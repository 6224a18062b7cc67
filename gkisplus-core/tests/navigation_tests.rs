// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for navigation history.

use gkisplus_core::{BackOutcome, NavigationController, Route};
use proptest::prelude::*;

#[test]
fn test_session_walkthrough() {
    // A realistic session: home, browse the gallery into an album, back out,
    // then open settings from the gallery screen.
    let mut nav = NavigationController::new(Route::Home);

    nav.navigate(Route::Gallery);
    nav.navigate(Route::GalleryAlbum);
    assert_eq!(nav.pop_back(), BackOutcome::Moved(Route::Gallery));

    nav.navigate(Route::Settings);
    assert_eq!(nav.current(), Route::Settings);
    // The album branch was discarded on navigate
    assert_eq!(nav.pop_forward(), None);

    assert_eq!(nav.pop_back(), BackOutcome::Moved(Route::Gallery));
    assert_eq!(nav.pop_back(), BackOutcome::AtRoot(Route::Home));
}

#[test]
fn test_back_at_root_is_idempotent() {
    let mut nav = NavigationController::new(Route::Home);
    for _ in 0..5 {
        assert_eq!(nav.pop_back(), BackOutcome::AtRoot(Route::Home));
    }
    assert_eq!(nav.depth(), 0);
}

fn any_route() -> impl Strategy<Value = Route> {
    prop::sample::select(vec![
        Route::Home,
        Route::WorshipServices,
        Route::LiveStream,
        Route::Devotional,
        Route::Forms,
        Route::SeasonalAgenda,
        Route::Gallery,
        Route::GalleryAlbum,
        Route::Library,
        Route::Settings,
        Route::About,
    ])
}

#[derive(Debug, Clone)]
enum NavOp {
    Navigate(Route),
    Back,
    Forward,
}

fn any_op() -> impl Strategy<Value = NavOp> {
    prop_oneof![
        any_route().prop_map(NavOp::Navigate),
        Just(NavOp::Back),
        Just(NavOp::Forward),
    ]
}

proptest! {
    /// After any operation sequence the controller stays internally
    /// consistent: the cursor never exceeds the depth, and the current
    /// route matches the cursor position.
    #[test]
    fn prop_controller_never_desyncs(ops in prop::collection::vec(any_op(), 0..60)) {
        let mut nav = NavigationController::new(Route::Home);
        for op in ops {
            match op {
                NavOp::Navigate(route) => {
                    nav.navigate(route);
                    prop_assert_eq!(nav.current(), route);
                    prop_assert!(!nav.can_go_forward());
                }
                NavOp::Back => {
                    let outcome = nav.pop_back();
                    prop_assert_eq!(outcome.route(), nav.current());
                }
                NavOp::Forward => {
                    if let Some(route) = nav.pop_forward() {
                        prop_assert_eq!(route, nav.current());
                    }
                }
            }
            prop_assert!(nav.depth() <= 60);
        }
    }

    /// Back immediately undone by forward restores the route, whenever a
    /// back actually moved.
    #[test]
    fn prop_forward_undoes_back(routes in prop::collection::vec(any_route(), 1..20)) {
        let mut nav = NavigationController::new(Route::Home);
        for route in &routes {
            nav.navigate(*route);
        }

        let before = nav.current();
        if let BackOutcome::Moved(_) = nav.pop_back() {
            prop_assert_eq!(nav.pop_forward(), Some(before));
            prop_assert_eq!(nav.current(), before);
        }
    }

    /// Enough back gestures always reach the default route.
    #[test]
    fn prop_back_always_terminates_at_default(routes in prop::collection::vec(any_route(), 0..20)) {
        let mut nav = NavigationController::new(Route::Home);
        for route in &routes {
            nav.navigate(*route);
        }

        for _ in 0..routes.len() + 1 {
            nav.pop_back();
        }
        prop_assert_eq!(nav.current(), Route::Home);
    }
}
