//! HTTP handlers for pages, lead intake and WordPress redirects

pub mod health;
pub mod leads;
pub mod pages;
pub mod redirects;
pub mod routes;
