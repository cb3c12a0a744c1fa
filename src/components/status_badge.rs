// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Online,
    Offline,
    #[default]
    Pending,
}

impl BadgeKind {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeKind::Online => "online",
            BadgeKind::Offline => "offline",
            BadgeKind::Pending => "pending",
        }
    }

    /// Lenient parse for free-form type strings; anything unrecognised is pending.
    pub fn from_type(raw: &str) -> BadgeKind {
        match raw.trim().to_ascii_lowercase().as_str() {
            "online" => BadgeKind::Online,
            "offline" => BadgeKind::Offline,
            _ => BadgeKind::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub kind: BadgeKind,
}

impl StatusBadge {
    pub fn new(label: impl Into<String>, kind: BadgeKind) -> Self {
        StatusBadge {
            label: label.into(),
            kind,
        }
    }

    pub fn pending(label: impl Into<String>) -> Self {
        Self::new(label, BadgeKind::default())
    }

    pub fn render(&self) -> String {
        format!(
            r#"<span class="status-badge {}">{}</span>"#,
            self.kind.class(),
            escape_html(&self.label)
        )
    }
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
