//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the full `TuiApp` through key
//! presses against a `TestBackend` and check both the collection state and
//! the rendered screen.
