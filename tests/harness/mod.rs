#![allow(dead_code)]

pub mod counting_store;
pub mod fixtures;
pub mod mock_http;
pub mod recording_notifier;
pub mod scripted_api;
pub mod temp_db;
