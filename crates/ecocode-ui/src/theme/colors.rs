//! Color definitions for the Eco-Code theme

/// RGBA color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a new RGBA color from 0-255 values
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBBAA)
    pub const fn from_hex(hex: u32) -> Self {
        Self::new(
            ((hex >> 24) & 0xFF) as u8,
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Create opaque color from RGB hex (0xRRGGBB)
    pub const fn rgb(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Create with alpha
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }
}

/// Theme color palette
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // === Backgrounds ===
    /// Window background
    pub app_bg: Rgba,
    /// Header bar background
    pub header_bg: Rgba,
    /// Panel background
    pub panel_bg: Rgba,
    /// Surface/card background
    pub surface: Rgba,
    /// Elevated surface
    pub surface_elevated: Rgba,
    /// Input field background
    pub input_bg: Rgba,

    // === Brand Colors ===
    /// Primary brand color (leaf green)
    pub primary: Rgba,
    /// Primary hover state
    pub primary_hover: Rgba,
    /// Text on primary backgrounds
    pub primary_foreground: Rgba,

    // === Text Colors ===
    /// Primary text
    pub text_primary: Rgba,
    /// Secondary/muted text
    pub text_secondary: Rgba,
    /// Disabled text
    pub text_disabled: Rgba,

    // === Status Colors ===
    /// Success state
    pub success: Rgba,
    /// Warning state
    pub warning: Rgba,

    // === UI Elements ===
    /// Border color
    pub border: Rgba,
    /// Border subtle
    pub border_subtle: Rgba,
    /// Selection/highlight
    pub selection: Rgba,
    /// Hover state
    pub hover: Rgba,

    // === Chat ===
    /// User message bubble
    pub user_bubble: Rgba,
    /// Assistant message bubble
    pub assistant_bubble: Rgba,

    // === Syntax/Code ===
    /// Code background
    pub code_bg: Rgba,
    /// Code text
    pub code_text: Rgba,
    /// Line number gutter text
    pub line_number: Rgba,
}

impl ThemeColors {
    /// Create the dark theme color palette
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            app_bg: Rgba::rgb(0x0f1512),          // Near-black green
            header_bg: Rgba::rgb(0x131b17),       // Header bar
            panel_bg: Rgba::rgb(0x18211c),        // Panel background
            surface: Rgba::rgb(0x1e2923),         // Surface color
            surface_elevated: Rgba::rgb(0x25322b), // Elevated surface
            input_bg: Rgba::rgb(0x141c18),        // Input background

            // Brand colors
            primary: Rgba::rgb(0x22a06b),         // Leaf green
            primary_hover: Rgba::rgb(0x2bb97d),   // Primary hover
            primary_foreground: Rgba::rgb(0xf4fbf7),

            // Text colors
            text_primary: Rgba::rgb(0xe8efe9),    // Primary text
            text_secondary: Rgba::rgb(0x8fa397),  // Secondary text
            text_disabled: Rgba::rgb(0x5d6f64),   // Disabled text

            // Status colors
            success: Rgba::rgb(0x3fb950),         // Green
            warning: Rgba::rgb(0xe3b341),         // Amber

            // UI Elements
            border: Rgba::rgb(0x2f3d35),          // Border color
            border_subtle: Rgba::rgb(0x243029),   // Subtle border
            selection: Rgba::from_hex(0x22a06b33), // Selection with transparency
            hover: Rgba::from_hex(0xb1c4b820),    // Hover state

            // Chat
            user_bubble: Rgba::rgb(0x1d6b4b),     // Deep green
            assistant_bubble: Rgba::rgb(0x222e27), // Muted surface

            // Code
            code_bg: Rgba::rgb(0x111814),         // Code background
            code_text: Rgba::rgb(0xdce8e0),       // Code text
            line_number: Rgba::rgb(0x4f6157),     // Gutter
        }
    }
}

// === Predefined Colors ===

/// Transparent color
pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
