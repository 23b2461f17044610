//! Build automation tasks for shmup
//!
//! Usage:
//!   cargo run -p xtask -- check-assets   # Verify runtime assets are present and valid
//!   cargo run -p xtask -- dist           # Native release build with assets in dist/native
//!   cargo run -p xtask -- build-web      # WASM build with assets in dist/web

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Files the game refuses to start without
const REQUIRED_ASSETS: [&str; 2] = ["title.png", "crosshair.png"];
/// Optional tuning file; checked for syntax if present
const CONFIG_ASSET: &str = "shmup.ron";

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for shmup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every asset the game loads at startup exists
    CheckAssets,
    /// Build a native release into dist/native
    Dist,
    /// Build WASM for web deployment into dist/web
    BuildWeb,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAssets => check_assets(),
        Commands::Dist => dist(),
        Commands::BuildWeb => build_web(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dest)
            .arg(url),
    )
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Empty `dir`, creating it if needed
fn fresh_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

fn check_assets() -> Result<()> {
    let assets = project_root()?.join("assets");
    let mut problems = Vec::new();

    for name in REQUIRED_ASSETS {
        let path = assets.join(name);
        match std::fs::read(&path) {
            Ok(bytes) if bytes.starts_with(PNG_MAGIC) => println!("  ok      {}", name),
            Ok(_) => problems.push(format!("{} is not a PNG file", name)),
            Err(e) => problems.push(format!("{}: {}", name, e)),
        }
    }

    // The game runs on defaults without it, but a broken one is a mistake
    let config = assets.join(CONFIG_ASSET);
    if config.exists() {
        let text = std::fs::read_to_string(&config)
            .with_context(|| format!("reading {}", config.display()))?;
        match ron::from_str::<ron::Value>(&text) {
            Ok(_) => println!("  ok      {}", CONFIG_ASSET),
            Err(e) => problems.push(format!("{}: {}", CONFIG_ASSET, e)),
        }
    } else {
        println!("  absent  {} (defaults will be used)", CONFIG_ASSET);
    }

    if !problems.is_empty() {
        for p in &problems {
            eprintln!("  error   {}", p);
        }
        anyhow::bail!("{} asset problem(s) in {}", problems.len(), assets.display());
    }

    println!("Assets OK");
    Ok(())
}

/// Native release build
fn dist() -> Result<()> {
    check_assets()?;

    let root = project_root()?;
    let dist = root.join("dist/native");

    println!("Building native release...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--bin", "shmup"]),
    )?;

    fresh_dir(&dist)?;

    let binary_name = if cfg!(target_os = "windows") { "shmup.exe" } else { "shmup" };
    std::fs::copy(
        root.join("target/release").join(binary_name),
        dist.join(binary_name),
    )
    .context("copying release binary")?;

    // The game looks for assets/ relative to its working directory
    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    println!("Native build complete: dist/native/");
    Ok(())
}

/// Build WASM for web deployment
fn build_web() -> Result<()> {
    check_assets()?;

    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--bin", "shmup", "--target", "wasm32-unknown-unknown"]),
    )?;

    fresh_dir(&dist)?;

    println!("Copying files to dist/web...");
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release/shmup.wasm"),
        dist.join("shmup.wasm"),
    )
    .context("copying wasm binary")?;
    std::fs::copy(root.join("web/index.html"), dist.join("index.html"))?;

    // Download macroquad JS bundle
    download_file(
        "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js",
        &dist.join("mq_js_bundle.js"),
    )?;

    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    println!("Web build complete: dist/web/");
    Ok(())
}
