//! Domain models for the short UUID worker.
//!
//! This module contains the digit alphabets and the API contracts.

pub mod alphabet;
pub mod dto;

pub use alphabet::{Alphabet, BASE_36, BASE_62, Base};
pub use dto::{
    ApiResponse, Base64Response, BaseNResponse, HealthResponse, IdResponse, NamedUuidResponse,
    RandomIdResponse, ReadyResponse, ShortIdResponse, ShortenResponse,
};
