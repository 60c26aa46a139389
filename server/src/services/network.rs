//! Wi-Fi access point lookup for the landing page.
//!
//! The BSSID of the network the server host is associated with lets students
//! confirm they are on the classroom network. It is read by shelling out to
//! the platform's wireless tool and scraping the text output.

use std::sync::LazyLock;

use regex::Regex;
use tokio::process::Command;

static NETSH_BSSID: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"BSSID\s*:\s*([0-9A-Fa-f:-]+)").ok());
static IWCONFIG_ACCESS_POINT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"Access Point: ([0-9A-Fa-f:]+)").ok());

/// Which tool's output format to expect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// `netsh wlan show interfaces`
    Windows,
    /// `iwconfig`
    Unix,
}

impl Platform {
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    fn command(self) -> Command {
        match self {
            Self::Windows => {
                let mut cmd = Command::new("netsh");
                cmd.args(["wlan", "show", "interfaces"]);
                cmd
            }
            Self::Unix => Command::new("iwconfig"),
        }
    }
}

/// Pull the first BSSID out of the wireless tool's output.
#[must_use]
pub fn parse_bssid(output: &str, platform: Platform) -> Option<String> {
    let pattern = match platform {
        Platform::Windows => NETSH_BSSID.as_ref(),
        Platform::Unix => IWCONFIG_ACCESS_POINT.as_ref(),
    }?;
    pattern
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Run the platform tool and parse its output. `None` when the tool cannot
/// run or reports no association.
pub async fn detect_bssid() -> Option<String> {
    let platform = Platform::current();
    let output = match platform.command().output().await {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(error = %e, ?platform, "wireless tool unavailable");
            return None;
        }
    };
    // iwconfig prints "no wireless extensions" for wired interfaces on stderr
    // but still exits 0, so stdout is all that matters.
    parse_bssid(&String::from_utf8_lossy(&output.stdout), platform)
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
