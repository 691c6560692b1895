//! Host-side helper: `cargo run` builds the wasm bundle into `static/pkg`
//! and serves `static/` on http://127.0.0.1:8000.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::process::{Command, Stdio};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            log::error!("wasm-pack finished with errors");
            std::process::exit(1);
        }
        Err(_) => {
            log::warn!("wasm-pack not found in PATH; serving whatever is already in static/pkg");
        }
    }

    log::info!("Serving static/ at http://127.0.0.1:8000 …");
    match Command::new("python3")
        .args(["-m", "http.server", "8000", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(st) => log::error!("http server exited with {st}"),
        Err(err) => {
            log::error!("failed to start http server: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
