/*! Integration tests for docdelta.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - doc: Tests for the document model (Doc, List, Value, paths, JSON interop)
 * - diff: Tests for the diff engine and its documented properties
 * - snapshot: Tests for snapshot capture and isolation
 * - entity: Tests for the entity layer (schema coercion, observers, dirty tracking)
 * - oid: Tests for object id parsing and generation
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("docdelta=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod diff;
mod doc;
mod helpers;
