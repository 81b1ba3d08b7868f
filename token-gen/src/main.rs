use anyhow::{Context, Result, bail};
use clap::Parser;
use pos_api::services::auth::{Role, TokenIssuer, TokenVerifier};

/// Mint an HS256 bearer token for local testing against pos-api.
///
/// - Signs `{sub, role, iat, exp}` with the same secret the API verifies with (`JWT_SECRET`)
/// - Prints the token, then (unless `--quiet`) the decoded claims
#[derive(Parser, Debug)]
#[command(name = "token-gen", version, about)]
struct Args {
    /// Subject id (staff / customer id)
    #[arg(long)]
    sub: String,

    /// Role: admin | cashier | customer
    #[arg(long, default_value = "cashier")]
    role: Role,

    /// Token lifetime in seconds
    #[arg(long, env = "ACCESS_TOKEN_TTL_SECONDS", default_value_t = 3600)]
    ttl_seconds: u64,

    /// Override iat (unix seconds). Default: now.
    #[arg(long)]
    iat: Option<i64>,

    /// HS256 signing secret
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    secret: String,

    /// Print only the token (no extra lines)
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.sub.trim().is_empty() {
        bail!("--sub must not be empty");
    }
    if args.ttl_seconds == 0 {
        bail!("--ttl-seconds must be > 0");
    }

    let issuer = TokenIssuer::new(args.secret.as_bytes(), args.ttl_seconds);
    let iat = args.iat.unwrap_or_else(|| chrono::Utc::now().timestamp());
    let token = issuer
        .issue_at(&args.sub, args.role, iat)
        .context("failed to sign token")?;

    if args.quiet {
        println!("{token}");
        return Ok(());
    }

    // 同じ secret で検証できることを確認してから claims を表示する
    let claims = TokenVerifier::new(args.secret.as_bytes(), 0)
        .verify_at(&token, iat)
        .context("minted token does not verify")?;

    println!("token: {token}");
    println!(
        "claims: {}",
        serde_json::json!({
            "sub": claims.sub,
            "role": claims.role,
            "iat": claims.iat,
            "exp": claims.exp,
        })
    );
    println!("header: Authorization: Bearer {token}");

    Ok(())
}
