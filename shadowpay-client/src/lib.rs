//! # shadowpay-client
//!
//! Typed async client for the ShadowPay API: ZK payments, the privacy pool,
//! token registry, bot spending authorizations, merchant tools, webhooks and
//! ShadowID.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shadowpay_client::{ShadowPayApi, ShadowPayClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ShadowPayClient::new("your-api-key")?;
//!
//!     let balance = client.pool_balance("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").await?;
//!     println!("{} lamports", balance.balance);
//!
//!     let tokens = client.list_tokens().await?;
//!     for t in &tokens.tokens {
//!         println!("{} {}", t.symbol, t.mint);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`ClientError`]. Use [`ClientError::is_expected`] to tell
//! ordinary rejections (bad input, unknown record, rejected key) apart from
//! transport and server faults.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{DEFAULT_BASE_URL, ShadowPayClient, ShadowPayClientBuilder};
pub use error::{ClientError, Result};
pub use traits::ShadowPayApi;
pub use types::*;
pub use utils::log_sanitizer::{mask_secret, mask_secret_display};
