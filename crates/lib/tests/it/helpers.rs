//! Shared builders for integration tests.

use docdelta::doc::{Doc, List};

pub const SAMPLE_ID: &str = "507f1f77bcf86cd799439011";

/// A small user document with a nested profile and a tag list.
pub fn user_doc() -> Doc {
    Doc::new()
        .with("_id", SAMPLE_ID.to_string())
        .with("name", "Alice")
        .with("age", 30)
        .with_doc(
            "profile",
            Doc::new().with("bio", "Software developer").with("city", "Berlin"),
        )
        .with_list("tags", ["admin", "staff"].into_iter().collect::<List>())
}
