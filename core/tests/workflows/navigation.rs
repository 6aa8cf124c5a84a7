// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use eventhub_core::{Route, Session, UserRole, navigate};

use crate::common::session;

#[test]
fn anonymous_create_event_goes_to_login_with_return_url() {
    // Arrange
    let session = Session::anonymous();

    // Act
    let route = navigate(&session, "/create-event");

    // Assert
    assert_eq!(
        route,
        Route::Login {
            return_url: Some("/create-event".to_string())
        }
    );
    assert_eq!(route.path(), "/login?returnUrl=/create-event");
}

#[test]
fn signed_in_user_passes_the_gate() {
    // Arrange
    let session = session(7, UserRole::User);

    // Act & Assert
    assert_eq!(navigate(&session, "/create-event"), Route::CreateEvent);
    assert_eq!(navigate(&session, "/edit-event/5"), Route::EditEvent(5));
    assert_eq!(navigate(&session, "/profile"), Route::Profile);
}

#[test]
fn public_routes_need_no_session() {
    // Arrange
    let session = Session::anonymous();

    // Act & Assert
    assert_eq!(navigate(&session, "/"), Route::Events);
    assert_eq!(navigate(&session, "/event/3"), Route::EventDetail(3));
    assert_eq!(navigate(&session, "/register"), Route::Register);
    assert_eq!(navigate(&session, "/nowhere"), Route::Events);
}

#[test]
fn login_route_keeps_return_url_through_a_round_trip() {
    // Arrange
    let route = Route::parse("/login?returnUrl=/edit-event/5");

    // Act
    let path = route.path();

    // Assert
    assert_eq!(path, "/login?returnUrl=/edit-event/5");
    assert_eq!(Route::parse(&path), route);
}
