// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use showroom::components::{BadgeKind, StatusBadge};

#[test]
fn render_is_stable_across_calls() {
    let badge = StatusBadge::new("Active", BadgeKind::Online);
    let first = badge.render();
    for _ in 0..3 {
        assert_eq!(StatusBadge::new("Active", BadgeKind::Online).render(), first);
    }
    assert_eq!(first, r#"<span class="status-badge online">Active</span>"#);
}

#[test]
fn type_defaults_to_pending() {
    assert_eq!(StatusBadge::pending("Review").kind, BadgeKind::Pending);
    assert_eq!(BadgeKind::default().class(), "pending");
}

#[test]
fn unknown_type_falls_back_to_pending() {
    assert_eq!(BadgeKind::from_type("OFFLINE"), BadgeKind::Offline);
    assert_eq!(BadgeKind::from_type(" online "), BadgeKind::Online);
    assert_eq!(BadgeKind::from_type("sold"), BadgeKind::Pending);
}

#[test]
fn label_is_escaped() {
    let out = StatusBadge::new("<b>&</b>", BadgeKind::Offline).to_string();
    assert_eq!(
        out,
        r#"<span class="status-badge offline">&lt;b&gt;&amp;&lt;/b&gt;</span>"#
    );
}
