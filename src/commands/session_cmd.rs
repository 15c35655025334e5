//! Sign-in commands.
//!
//! The access token comes from the identity provider; `login` only stores it
//! together with the profile the recipe API keys favourites on.

use clap::Args;

use recipebook::auth::{Session, SessionAuth};
use recipebook::config::Config;
use recipebook::models::UserProfile;
use recipebook::services::AuthService;

/// Store an access token and profile
#[derive(Args)]
pub struct LoginCommand {
    /// Access token issued by the identity provider
    #[arg(long)]
    token: String,

    /// User id (the token's `sub` claim)
    #[arg(long)]
    sub: String,

    /// Display name
    #[arg(long)]
    name: Option<String>,

    /// Email address
    #[arg(long)]
    email: Option<String>,

    /// Seconds until the token expires
    #[arg(long, default_value_t = 36000)]
    expires_in: i64,
}

impl LoginCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        if self.token.trim().is_empty() {
            return Err("Access token cannot be empty".into());
        }
        if self.sub.trim().is_empty() {
            return Err("User id cannot be empty".into());
        }
        if self.expires_in <= 0 {
            return Err("--expires-in must be positive".into());
        }

        let profile = UserProfile {
            sub: self.sub.trim().to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
        };
        let session = Session::new(self.token.trim(), self.expires_in, profile)?;

        let mut auth = SessionAuth::load(&config.session_path.value);
        auth.sign_in(session.clone())?;

        println!("Signed in as {}", session.profile.display_name());
        println!(
            "Session valid until {}",
            session.expires_at.format("%Y-%m-%d %H:%M UTC")
        );
        Ok(())
    }
}

/// Forget the stored session
#[derive(Args)]
pub struct LogoutCommand;

impl LogoutCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let mut auth = SessionAuth::load(&config.session_path.value);
        if auth.clear()? {
            println!("Signed out.");
        } else {
            println!("Already signed out.");
        }
        Ok(())
    }
}

/// Show who is signed in
#[derive(Args)]
pub struct StatusCommand;

impl StatusCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let auth = SessionAuth::load(&config.session_path.value);

        match auth.session() {
            Some(session) if auth.is_authenticated() => {
                println!("Signed in as {}", session.profile.display_name());
                println!("  user id: {}", session.profile.sub);
                println!(
                    "  expires: {}",
                    session.expires_at.format("%Y-%m-%d %H:%M UTC")
                );
            }
            Some(session) => {
                println!(
                    "Session for {} expired at {}.",
                    session.profile.display_name(),
                    session.expires_at.format("%Y-%m-%d %H:%M UTC")
                );
                println!("Run 'recipebook login' to sign in again.");
            }
            None => {
                println!("Not signed in. Run 'recipebook login' to star recipes.");
            }
        }
        Ok(())
    }
}
