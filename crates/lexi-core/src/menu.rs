/// A single menu interaction
#[derive(Debug, Clone, Copy)]
pub struct MenuRequest<'a> {
    pub lines: &'a [String],
    pub prompt: &'a str,
    /// Whether the user may type text that is not one of `lines`
    pub allow_custom: bool,
}

/// Blocking picker: shows lines, returns the selected text or `None` when closed
#[async_trait::async_trait]
pub trait MenuPresenter: Send + Sync {
    async fn present(&self, request: MenuRequest<'_>) -> Result<Option<String>, PresenterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PresenterError {
    #[error("Failed to start menu program {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Menu IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Menu program failed: {0}")]
    Failed(String),
}

/// What the user did with a list menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Back,
    Index(usize),
    Cancel,
}

/// Parse a raw presenter response.
///
/// The back label matches exactly. Otherwise a leading run of ASCII digits
/// directly followed by `:` gives the index. Anything else cancels.
pub fn parse_choice(raw: Option<&str>, back_label: &str) -> Choice {
    let Some(raw) = raw else {
        return Choice::Cancel;
    };
    if raw == back_label {
        return Choice::Back;
    }

    let digits = raw.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || raw.as_bytes().get(digits) != Some(&b':') {
        return Choice::Cancel;
    }

    raw[..digits]
        .parse()
        .map(Choice::Index)
        .unwrap_or(Choice::Cancel)
}

/// `"{index}: {item}"` lines in display order
pub fn numbered<I, T>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| format!("{index}: {item}"))
        .collect()
}

/// Renders domain lists through a [`MenuPresenter`] and turns the answer into a [`Choice`]
pub struct MenuProjection<M> {
    presenter: M,
    back_label: String,
}

impl<M: MenuPresenter> MenuProjection<M> {
    pub fn new(presenter: M, back_label: impl Into<String>) -> Self {
        Self {
            presenter,
            back_label: back_label.into(),
        }
    }

    /// Show `lines` below the back entry, free text disallowed
    pub async fn render(&self, lines: &[String], prompt: &str) -> Result<Choice, PresenterError> {
        let mut menu = Vec::with_capacity(lines.len() + 1);
        menu.push(self.back_label.clone());
        menu.extend_from_slice(lines);

        let raw = self
            .presenter
            .present(MenuRequest {
                lines: &menu,
                prompt,
                allow_custom: false,
            })
            .await?;

        let choice = parse_choice(raw.as_deref(), &self.back_label);
        tracing::debug!(?choice, "Menu '{}' answered", prompt);
        Ok(choice)
    }

    /// Free text prompt with no entries. `None` when closed or left blank.
    pub async fn prompt_word(&self, prompt: &str) -> Result<Option<String>, PresenterError> {
        let raw = self
            .presenter
            .present(MenuRequest {
                lines: &[],
                prompt,
                allow_custom: true,
            })
            .await?;

        Ok(raw
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty()))
    }
}
