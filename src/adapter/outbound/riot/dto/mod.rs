//! Riot API data transfer objects.
//!
//! Raw payload shapes for the account, match and timeline endpoints and
//! their conversion into domain types. Conversion is where malformed
//! payloads are caught.

pub mod response;
