//! OAuth2 authentication management for the Gmail API

use std::future::Future;
use std::io;
use std::path::Path;
use std::pin::Pin;

use google_gmail1::{hyper_rustls, hyper_util, yup_oauth2, Gmail};
use yup_oauth2::authenticator_delegate::InstalledFlowDelegate;

use crate::error::{Result, SweepError};
use crate::token_store::TokenStore;

/// Full-mailbox scope. Permanent deletion is not covered by gmail.modify,
/// so trash and delete both run under the broad scope.
pub const MAIL_SCOPE: &str = "https://mail.google.com/";

/// Scopes requested during the authorization exchange
pub const REQUIRED_SCOPES: &[&str] = &[MAIL_SCOPE];

/// Type alias for Gmail Hub to simplify type signatures
pub type GmailHub =
    Gmail<hyper_rustls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>>;

/// Reads the operator's response to an authorization prompt.
///
/// The function receives the authorization URL, is responsible for
/// presenting it, and returns the single-use code the operator typed.
pub type AuthCodePrompt = Box<dyn Fn(&str) -> io::Result<String> + Send + Sync>;

/// Flow delegate that hands the authorization URL to an injected prompt
/// and returns the code it collects.
pub struct ConsoleFlowDelegate {
    prompt: AuthCodePrompt,
}

impl ConsoleFlowDelegate {
    pub fn new(prompt: AuthCodePrompt) -> Self {
        Self { prompt }
    }
}

impl Default for ConsoleFlowDelegate {
    fn default() -> Self {
        Self::new(Box::new(|url| {
            println!(
                "Go to the following link in your browser then type the authorization code:\n{}",
                url
            );
            let mut code = String::new();
            io::stdin().read_line(&mut code)?;
            Ok(code)
        }))
    }
}

impl InstalledFlowDelegate for ConsoleFlowDelegate {
    fn present_user_url<'a>(
        &'a self,
        url: &'a str,
        need_code: bool,
    ) -> Pin<Box<dyn Future<Output = std::result::Result<String, String>> + Send + 'a>> {
        Box::pin(async move {
            if need_code {
                let code = (self.prompt)(url)
                    .map_err(|e| format!("Unable to read authorization code: {}", e))?;
                Ok(code.trim().to_string())
            } else {
                println!("Go to the following link in your browser:\n{}", url);
                Ok(String::new())
            }
        })
    }
}

/// Authenticate and return a Gmail hub, prompting on standard input if no
/// cached token is usable.
pub async fn initialize_gmail_hub(
    credentials_path: &Path,
    token_store: &TokenStore,
) -> Result<GmailHub> {
    initialize_gmail_hub_with_delegate(credentials_path, token_store, ConsoleFlowDelegate::default())
        .await
}

/// Initialize the Gmail API hub with OAuth2 authentication
///
/// Sets up the complete Gmail API client:
/// - InstalledFlow (desktop app flow) with the authorization code typed at
///   the console rather than caught on a local redirect port
/// - Token persistence to the store's cache file for automatic refresh
/// - HTTP/1 client with TLS support
///
/// Any failure here is fatal: the authorization code is single-use and
/// interactive, so there is no retry.
pub async fn initialize_gmail_hub_with_delegate(
    credentials_path: &Path,
    token_store: &TokenStore,
    delegate: ConsoleFlowDelegate,
) -> Result<GmailHub> {
    // Read OAuth2 credentials
    let secret = yup_oauth2::read_application_secret(credentials_path)
        .await
        .map_err(|e| SweepError::AuthError(format!("Failed to read credentials: {}", e)))?;

    // A corrupt cache must fall back to the interactive flow exactly like
    // a missing one, not abort the run.
    token_store.prepare().await?;

    let auth = yup_oauth2::InstalledFlowAuthenticator::builder(
        secret,
        yup_oauth2::InstalledFlowReturnMethod::Interactive,
    )
    .persist_tokens_to_disk(token_store.path())
    .flow_delegate(Box::new(delegate))
    .build()
    .await
    .map_err(|e| SweepError::AuthError(format!("Failed to build authenticator: {}", e)))?;

    // Pre-fetch a token so the exchange (if any) and the cache write happen
    // before the first API call.
    let _token = auth
        .token(REQUIRED_SCOPES)
        .await
        .map_err(|e| SweepError::AuthError(format!("Failed to obtain token: {}", e)))?;

    token_store.secure().await?;

    // Configure HTTP client with TLS
    // Use HTTP/1 for compatibility (HTTP/2 is default but HTTP/1 works better with google-gmail1)
    let client = hyper_util::client::legacy::Client::builder(hyper_util::rt::TokioExecutor::new())
        .build(
            hyper_rustls::HttpsConnectorBuilder::new()
                .with_native_roots()
                .map_err(|e| SweepError::AuthError(format!("Failed to load TLS roots: {}", e)))?
                .https_or_http()
                .enable_http1()
                .build(),
        );

    Ok(Gmail::new(client, auth))
}
