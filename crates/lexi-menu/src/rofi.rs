use std::io::ErrorKind;
use std::process::Stdio;

use async_trait::async_trait;
use lexi_config::menu::MenuConfig;
use lexi_core::menu::{MenuPresenter, MenuRequest, PresenterError};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Exit status rofi and dmenu use when the user closes the menu
const CANCELLED_STATUS: i32 = 1;

/// Runs a dmenu-compatible program once per menu.
///
/// Lines go to the child's stdin separated by `\n`; the picked line is read
/// back from stdout.
#[derive(Debug, Clone)]
pub struct RofiPresenter {
    command: String,
    args: Vec<String>,
    prompt_flag: String,
    no_custom_flag: String,
}

impl RofiPresenter {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        let defaults = MenuConfig::default();
        Self {
            command: command.into(),
            args,
            prompt_flag: defaults.prompt_flag,
            no_custom_flag: defaults.no_custom_flag,
        }
    }

    pub fn from_config(config: &MenuConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            prompt_flag: config.prompt_flag.clone(),
            no_custom_flag: config.no_custom_flag.clone(),
        }
    }

    pub fn argv(&self, prompt: &str, allow_custom: bool) -> Vec<String> {
        let mut argv = self.args.clone();
        argv.push(self.prompt_flag.clone());
        argv.push(prompt.to_string());
        if !allow_custom && !self.no_custom_flag.is_empty() {
            argv.push(self.no_custom_flag.clone());
        }
        argv
    }
}

#[async_trait]
impl MenuPresenter for RofiPresenter {
    async fn present(&self, request: MenuRequest<'_>) -> Result<Option<String>, PresenterError> {
        let argv = self.argv(request.prompt, request.allow_custom);
        tracing::debug!("Spawning {} {:?}", self.command, argv);

        let stdin = if request.lines.is_empty() {
            Stdio::null()
        } else {
            Stdio::piped()
        };

        let mut child = Command::new(&self.command)
            .args(&argv)
            .stdin(stdin)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| PresenterError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let input = request.lines.join("\n");
            match stdin.write_all(input.as_bytes()).await {
                // The picker may exit before reading everything
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                result => result?,
            }
        }

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            if output.status.code() == Some(CANCELLED_STATUS) {
                tracing::debug!("Menu closed without a choice");
                return Ok(None);
            }

            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PresenterError::Failed(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if selected.is_empty() {
            Ok(None)
        } else {
            Ok(Some(selected))
        }
    }
}
