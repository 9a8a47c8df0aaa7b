use anyhow::{Result, anyhow};
use std::process::{Child, Command, Stdio};
use std::thread;

pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Characters allowed after `tel:`: digits and the RFC 3966 dial separators.
fn is_dial_char(c: char) -> bool {
    c.is_ascii_digit() || "+*#();,.-/pPwW".contains(c)
}

/// Reject anything but a `tel:` link made of dial characters.
///
/// Contact text is untrusted and some platform openers hand their argument
/// to a command interpreter, so nothing else is passed on.
pub fn check_link(url: &str) -> Result<()> {
    let number = url
        .strip_prefix("tel:")
        .ok_or_else(|| anyhow!("not a tel: link: {url:?}"))?;
    if number.is_empty() || !number.chars().all(is_dial_char) {
        return Err(anyhow!("refusing to open {url:?}: not a dialable number"));
    }
    Ok(())
}

/// Build the platform opener invocation for a checked link.
pub fn opener_command(url: &str) -> Result<Command> {
    check_link(url)?;

    #[cfg(target_os = "macos")]
    let command = {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    };
    #[cfg(target_os = "windows")]
    let command = {
        let mut cmd = Command::new("rundll32");
        cmd.args(["url.dll,FileProtocolHandler", url]);
        cmd
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let command = {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    };

    Ok(command)
}

/// Hands `tel:` links to the desktop's default handler.
///
/// The opener is spawned and reaped on a worker thread; the caller only
/// learns whether it could be launched.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        let child = opener_command(url)?
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| anyhow!("failed to launch url opener: {err}"))?;

        reap_in_background(child, url.to_string());
        Ok(())
    }
}

fn reap_in_background(mut child: Child, url: String) {
    thread::spawn(move || match child.wait() {
        Ok(status) if status.success() => tracing::debug!(%url, "link opened"),
        Ok(status) => tracing::warn!(%url, %status, "url opener failed"),
        Err(err) => tracing::warn!(%url, error = %err, "could not wait for url opener"),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::tel_href;

    #[test]
    fn test_dialable_links_pass() {
        assert!(check_link(&tel_href("+33 1 23 45 67 89")).is_ok());
        assert!(check_link(&tel_href("555-1234")).is_ok());
        assert!(check_link(&tel_href("(555) 123,4567#2")).is_ok());
    }

    #[test]
    fn test_shell_metacharacters_are_rejected() {
        let phones = [
            "555&calc.exe",
            "1|del x",
            "555^&whoami",
            "5\"5",
            "555%PATH%",
            "555\u{1b}[2J",
        ];
        for phone in phones {
            let href = tel_href(phone);
            assert!(check_link(&href).is_err(), "{href}");
            assert!(opener_command(&href).is_err(), "{href}");
        }
    }

    #[test]
    fn test_non_tel_links_are_rejected() {
        assert!(check_link("https://example.com").is_err());
        assert!(check_link("tel:").is_err());
    }

    #[test]
    fn test_opener_receives_link_as_single_argument() {
        let href = tel_href("555 1234");
        let command = opener_command(&href).unwrap();
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.last().and_then(|a| a.to_str()), Some("tel:5551234"));
        assert_ne!(command.get_program(), "cmd");
    }

    #[cfg(unix)]
    #[test]
    fn test_slow_opener_does_not_block_caller() {
        let child = Command::new("sleep").arg("3").spawn().unwrap();
        let started = std::time::Instant::now();

        reap_in_background(child, "tel:1".to_string());
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }
}
