//! HTTP executor layer — `CryptowatchHttp`.

pub mod client;

pub use client::CryptowatchHttp;
