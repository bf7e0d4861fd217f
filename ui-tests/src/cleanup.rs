//! Kill `geckodriver` and `trunk serve` processes left behind by aborted
//! browser test runs.
//!
//! Usage:
//!   cargo run -p ui-tests --bin cleanup

use std::process::Command;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧹 Searching for orphaned test processes...");

    let killed = kill_matching("geckodriver --port")?
        + kill_matching("trunk serve --port")?;

    if killed == 0 {
        println!("✨ No orphaned test processes found!");
    } else {
        println!("🎉 Cleaned up {killed} orphaned test processes");
    }

    Ok(())
}

fn kill_matching(pattern: &str) -> Result<u32, Box<dyn std::error::Error>> {
    let output = Command::new("pgrep").arg("-f").arg(pattern).output()?;

    let mut killed = 0;
    for pid in String::from_utf8_lossy(&output.stdout).lines() {
        if pid.parse::<u32>().is_err() {
            continue;
        }
        match Command::new("kill").arg("-9").arg(pid).status() {
            Ok(status) if status.success() => {
                println!("✅ Killed `{pattern}` process {pid}");
                killed += 1;
            }
            Ok(status) => println!("❌ kill {pid} exited with {status}"),
            Err(e) => println!("❌ Failed to kill {pid}: {e}"),
        }
    }
    Ok(killed)
}
