//! Auth commands: login, register, logout, whoami.

use anyhow::Result;

use wayfind_core::auth::{PasswordStrength, RegistrationForm};

use crate::commands::utils;

pub async fn login(email: &str, password: &str) -> Result<()> {
    let auth = utils::auth_usecase()?;
    auth.restore().await?;

    if PasswordStrength::of(password) == PasswordStrength::Weak {
        println!("Note: this password is weak (fewer than 8 characters).");
    }

    let session = auth.login(email, password).await?;
    println!(
        "Logged in as {} <{}>",
        session.profile.name, session.profile.email
    );
    Ok(())
}

pub async fn register(
    email: &str,
    password: &str,
    confirm: &str,
    name: &str,
    phone: Option<String>,
) -> Result<()> {
    let auth = utils::auth_usecase()?;

    let form = RegistrationForm {
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
        name: name.to_string(),
        phone,
    };

    let profile = auth.register(&form).await?;
    println!(
        "Account created for {}. You can now log in with `wayfind login`.",
        profile.email
    );
    Ok(())
}

pub async fn logout() -> Result<()> {
    let auth = utils::auth_usecase()?;
    auth.restore().await?;
    auth.logout().await?;
    println!("Logged out.");
    Ok(())
}

pub async fn whoami() -> Result<()> {
    let auth = utils::auth_usecase()?;
    auth.restore().await?;

    match auth.current_user().await {
        Some(profile) => println!("Welcome, {} <{}>", profile.name, profile.email),
        None => println!("Not logged in."),
    }
    Ok(())
}
