//! Static content shown by the editor tabs

use crate::types::ConsoleLine;

/// The snippet displayed in the code pane
pub const CODE_SNIPPET: &str = r#"import React from 'react';
import { Button } from '@/components/ui/button';

function Header() {
  return (
    <header className="w-full p-4 flex justify-between items-center">
      <h1 className="text-2xl font-bold">Eco-Code Assistant</h1>
      <div className="space-x-2">
        <Button variant="outline">Login</Button>
        <Button>Get Started</Button>
      </div>
    </header>
  );
}

export default Header;"#;

/// Dev server output shown in the console tab
pub fn console_log() -> Vec<ConsoleLine> {
    vec![
        ConsoleLine::info("Starting development server..."),
        ConsoleLine::info("✓ Compiled successfully!"),
        ConsoleLine::info("Local: http://localhost:3000"),
        ConsoleLine::info("Network: http://192.168.1.5:3000"),
        ConsoleLine::warning("Warning: React version not specified in dependencies."),
    ]
}

/// A titled card on the preview page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    pub title: &'static str,
    pub body: &'static str,
}

/// Layout of the rendered preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPage {
    pub title: &'static str,
    /// Header buttons; the last one is the primary action
    pub header_buttons: [&'static str; 2],
    pub heading: &'static str,
    pub intro: &'static str,
    pub cards: [PreviewCard; 2],
}

pub const PREVIEW_PAGE: PreviewPage = PreviewPage {
    title: "Eco-Code Assistant",
    header_buttons: ["Login", "Get Started"],
    heading: "Welcome to Your Project",
    intro: "This is a live preview of your application. As you make changes to your code, \
            the preview will update automatically.",
    cards: [
        PreviewCard {
            title: "Features",
            body: "Explore all the amazing features of this application.",
        },
        PreviewCard {
            title: "Documentation",
            body: "Learn how to use and customize this application.",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConsoleLevel;

    #[test]
    fn test_console_ends_with_warning() {
        let log = console_log();
        assert_eq!(log.len(), 5);
        assert!(log[..4].iter().all(|l| l.level == ConsoleLevel::Info));
        assert_eq!(log[4].level, ConsoleLevel::Warning);
    }

    #[test]
    fn test_snippet_matches_preview_title() {
        assert!(CODE_SNIPPET.contains(PREVIEW_PAGE.title));
        for button in PREVIEW_PAGE.header_buttons {
            assert!(CODE_SNIPPET.contains(button));
        }
    }
}
