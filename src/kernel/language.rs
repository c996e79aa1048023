use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Language {
    #[serde(rename = "html")]
    Markup,
    #[serde(rename = "css")]
    Stylesheet,
    #[serde(rename = "js")]
    Script,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::Markup, Self::Stylesheet, Self::Script];

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" | "markup" => Some(Self::Markup),
            "css" | "stylesheet" => Some(Self::Stylesheet),
            "js" | "javascript" | "script" => Some(Self::Script),
            _ => None,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Markup => "html",
            Self::Stylesheet => "css",
            Self::Script => "js",
        }
    }

    /// Key under which the buffer text is persisted.
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Markup => "tryit-code-html",
            Self::Stylesheet => "tryit-code-css",
            Self::Script => "tryit-code-js",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Markup => 0,
            Self::Stylesheet => 1,
            Self::Script => 2,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Markup => "HTML",
            Self::Stylesheet => "CSS",
            Self::Script => "JavaScript",
        }
    }

    pub fn default_snippet(self) -> &'static str {
        match self {
            Self::Markup => concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n",
                "<head>\n",
                "  <meta charset=\"UTF-8\">\n",
                "  <title>Example</title>\n",
                "</head>\n",
                "<body>\n",
                "  <h1>Hello, world!</h1>\n",
                "</body>\n",
                "</html>",
            ),
            Self::Stylesheet => concat!(
                "body {\n",
                "  font-family: system-ui, sans-serif;\n",
                "  background: #f3f4f6;\n",
                "  color: #111827;\n",
                "}\n",
                "\n",
                "h1 {\n",
                "  color: #16a34a;\n",
                "}",
            ),
            Self::Script => concat!(
                "document.body.style.fontFamily = \"system-ui, sans-serif\";\n",
                "const h1 = document.createElement(\"h1\");\n",
                "h1.textContent = \"JavaScript works!\";\n",
                "document.body.appendChild(h1);",
            ),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
