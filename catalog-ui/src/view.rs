//! Toolkit-independent view model the dialogs and cards render to.
//!
//! A frontend walks the nodes to build its widgets; the `Display`
//! implementations give the plain text rendering used by the binary.

use std::fmt;

use species_core::FormField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

/// What pressing a button asks the owning component to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenEdit,
    CancelEdit,
    SubmitEdit,
    LearnMore,
    CloseDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub variant: ButtonVariant,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading(String),
    Subheading(String),
    Text(String),
    Image {
        src: String,
        alt: String,
    },
    /// A labelled read-only value.
    Field {
        label: &'static str,
        value: String,
    },
    Input {
        field: FormField,
        label: &'static str,
        value: String,
        error: Option<String>,
    },
    Button(Button),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: &'static str,
    pub nodes: Vec<Node>,
}

/// Inline content plus the modal dialog it currently shows, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub nodes: Vec<Node>,
    pub dialog: Option<DialogView>,
}

impl Button {
    pub fn primary(label: &'static str, action: Action) -> Self {
        Self {
            label,
            variant: ButtonVariant::Primary,
            action,
        }
    }

    pub fn secondary(label: &'static str, action: Action) -> Self {
        Self {
            label,
            variant: ButtonVariant::Secondary,
            action,
        }
    }
}

impl DialogView {
    /// The text lines of the dialog body, without the title.
    pub fn lines(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.to_string()).collect()
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        buttons(&self.nodes)
    }
}

impl Panel {
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        buttons(&self.nodes)
    }
}

fn buttons(nodes: &[Node]) -> impl Iterator<Item = &Button> {
    nodes.iter().filter_map(|n| match n {
        Node::Button(b) => Some(b),
        _ => None,
    })
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Heading(text) => write!(f, "# {text}"),
            Node::Subheading(text) => write!(f, "## {text}"),
            Node::Text(text) => f.write_str(text),
            Node::Image { src, alt } => write!(f, "[{alt}]({src})"),
            Node::Field { label, value } => write!(f, "{label}: {value}"),
            Node::Input {
                label,
                value,
                error,
                ..
            } => {
                write!(f, "{label}: [{value}]")?;
                if let Some(error) = error {
                    write!(f, "\n  ! {error}")?;
                }
                Ok(())
            }
            Node::Button(button) => write!(f, "<{}>", button.label),
        }
    }
}

impl fmt::Display for DialogView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        for node in &self.nodes {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{node}")?;
        }
        if let Some(dialog) = &self.dialog {
            write!(f, "{dialog}")?;
        }
        Ok(())
    }
}
