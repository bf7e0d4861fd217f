//! Starts the api, the trunk-served ui and a geckodriver-controlled Firefox.
//!
//! Run with debugging output:
//!
//! ```shell
//! RUST_LOG=ui_tests=debug,api=info cargo test -p ui-tests -- --nocapture
//! ```

use anyhow::{Context, Result, anyhow};
use fantoccini::{Client, ClientBuilder, Locator, elements::Element};
use rand::Rng;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use test_helpers::TestApp;
use tokio::time::sleep;
use tracing::{debug, info, warn};

pub struct TestEnvironment {
    pub api: TestApp,
    pub browser: Client,
    pub frontend_process: Child,
    pub geckodriver_process: Child,
    pub frontend_url: String,
}

impl TestEnvironment {
    #[cfg(test)]
    pub async fn setup() -> Result<Self> {
        Self::setup_with_options(false).await
    }

    pub async fn setup_headed() -> Result<Self> {
        Self::setup_with_options(true).await
    }

    async fn setup_with_options(headed: bool) -> Result<Self> {
        info!("🚀 Starting API server");
        let api = test_helpers::spawn_app().await;
        api.create_test_regions().await;
        let api_url = format!("http://localhost:{}", api.port);

        info!("🦎 Starting geckodriver");
        let (geckodriver_process, gecko_port) = spawn_with_retry(4444, |port| {
            let mut command = Command::new("geckodriver");
            command.arg("--port").arg(port.to_string());
            command
        })
        .await
        .context("Failed to start geckodriver")?;

        info!("🎨 Building and serving the frontend");
        build_frontend(&api_url)?;
        let (frontend_process, frontend_port) = spawn_with_retry(8080, |port| {
            let mut command = Command::new("trunk");
            command
                .arg("serve")
                .arg("--port")
                .arg(port.to_string())
                .current_dir("../ui")
                .env("BACKEND_URL", &api_url);
            command
        })
        .await
        .context("Failed to start trunk serve")?;
        let frontend_url = format!("http://localhost:{frontend_port}");
        wait_for_frontend(&frontend_url).await?;
        info!("✅ Frontend ready at {frontend_url}");

        let browser = connect_to_browser(gecko_port, headed).await?;

        Ok(TestEnvironment {
            api,
            browser,
            frontend_process,
            geckodriver_process,
            frontend_url,
        })
    }

    pub async fn goto(&self, path: &str) -> Result<()> {
        self.browser
            .goto(&format!("{}{path}", self.frontend_url))
            .await?;
        sleep(Duration::from_secs(1)).await;
        Ok(())
    }

    /// Type into the input with the given id, replacing its contents.
    pub async fn fill(&self, id: &str, value: &str) -> Result<()> {
        let field = self.browser.find(Locator::Id(id)).await?;
        field.click().await?;
        field.clear().await?;
        field.send_keys(value).await?;
        Ok(())
    }

    pub async fn submit_button(&self) -> Result<Element> {
        Ok(self
            .browser
            .find(Locator::Css("button[type='submit']"))
            .await?)
    }

    pub async fn heading(&self) -> Result<String> {
        Ok(self.browser.find(Locator::Css("h1")).await?.text().await?)
    }

    /// Poll until the current path ends with `suffix`.
    pub async fn wait_for_path(&self, suffix: &str) -> Result<()> {
        for _ in 0..20 {
            let url = self.browser.current_url().await?;
            if url.path().ends_with(suffix) {
                return Ok(());
            }
            sleep(Duration::from_millis(250)).await;
        }
        let url = self.browser.current_url().await?;
        Err(anyhow!("Expected a path ending in {suffix}, at {url}"))
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        for (name, process) in [
            ("frontend", &mut self.frontend_process),
            ("geckodriver", &mut self.geckodriver_process),
        ] {
            if let Err(e) = process.kill() {
                warn!("Failed to kill {name} process: {e}");
            }
        }
    }
}

/// Start a server on a random port near `base_port`, retrying on another
/// port if the process exits straight away.
async fn spawn_with_retry(
    base_port: u16,
    command_for: impl Fn(u16) -> Command,
) -> Result<(Child, u16)> {
    for attempt in 1..=5 {
        let port = base_port + rand::thread_rng().gen_range(0..=100);
        debug!("Trying port {port} (attempt {attempt})");

        let mut child = match command_for(port)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                debug!("Failed to spawn: {e}");
                continue;
            }
        };

        sleep(Duration::from_millis(500)).await;
        match child.try_wait() {
            Ok(None) => return Ok((child, port)),
            Ok(Some(status)) => debug!("Exited with {status}, retrying"),
            Err(e) => {
                debug!("Error checking process status: {e}");
                let _ = child.kill();
            }
        }
        sleep(Duration::from_millis(100)).await;
    }

    Err(anyhow!("Gave up after 5 attempts"))
}

fn build_frontend(backend_url: &str) -> Result<()> {
    let status = Command::new("trunk")
        .arg("build")
        .current_dir("../ui")
        .env("BACKEND_URL", backend_url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("Failed to run trunk build")?;
    if !status.success() {
        return Err(anyhow!("Frontend build failed with status: {status}"));
    }
    Ok(())
}

async fn wait_for_frontend(url: &str) -> Result<()> {
    for _ in 0..30 {
        if let Ok(response) = reqwest::get(url).await
            && response.status().is_success()
        {
            return Ok(());
        }
        sleep(Duration::from_secs(1)).await;
    }
    Err(anyhow!("Frontend failed to start after 30 attempts"))
}

async fn connect_to_browser(gecko_port: u16, headed: bool) -> Result<Client> {
    let firefox_opts = if headed {
        serde_json::json!({ "log": {"level": "error"} })
    } else {
        serde_json::json!({
            "args": ["--headless"],
            "log": {"level": "error"}
        })
    };
    let mut caps = serde_json::Map::new();
    caps.insert("moz:firefoxOptions".to_string(), firefox_opts);

    ClientBuilder::native()
        .capabilities(caps)
        .connect(&format!("http://localhost:{gecko_port}"))
        .await
        .context("Failed to connect to geckodriver")
}
