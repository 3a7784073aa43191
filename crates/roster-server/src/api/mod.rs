// ABOUTME: API module containing the HTTP handler functions for the roster REST API.
// ABOUTME: Person create/read/list handlers live in the persons sub-module.

pub mod persons;
