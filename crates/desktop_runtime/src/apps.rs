use window_manager::ComponentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub component: ComponentKind,
    /// Prefix for launch-minted window ids.
    pub slug: &'static str,
    pub window_title: &'static str,
    pub launcher_label: &'static str,
    pub desktop_icon_label: &'static str,
    pub glyph: &'static str,
    pub show_in_launcher: bool,
    pub show_on_desktop: bool,
}

const EXPLORER: AppDescriptor = AppDescriptor {
    component: ComponentKind::Explorer,
    slug: "explorer",
    window_title: "My Projects",
    launcher_label: "My Projects",
    desktop_icon_label: "Mi PC",
    glyph: "\u{1F4BB}",
    show_in_launcher: true,
    show_on_desktop: true,
};

const NOTEPAD: AppDescriptor = AppDescriptor {
    component: ComponentKind::Notepad,
    slug: "notepad",
    window_title: "About Me",
    launcher_label: "About Me",
    desktop_icon_label: "About Me",
    glyph: "\u{1F4DD}",
    show_in_launcher: true,
    show_on_desktop: true,
};

const CODE_SAMPLES: AppDescriptor = AppDescriptor {
    component: ComponentKind::CodeSamples,
    slug: "code-samples",
    window_title: "Code Samples",
    launcher_label: "Code Samples",
    desktop_icon_label: "Code Samples",
    glyph: "\u{1F4C4}",
    show_in_launcher: true,
    show_on_desktop: true,
};

const TERMINAL: AppDescriptor = AppDescriptor {
    component: ComponentKind::Terminal,
    slug: "terminal",
    window_title: "Terminal",
    launcher_label: "Terminal",
    desktop_icon_label: "Terminal",
    glyph: "\u{2328}",
    show_in_launcher: true,
    show_on_desktop: true,
};

const API_DEMO: AppDescriptor = AppDescriptor {
    component: ComponentKind::ApiDemo,
    slug: "api-demos",
    window_title: "API Demos",
    launcher_label: "API Demos",
    desktop_icon_label: "API Demos",
    glyph: "\u{1F310}",
    show_in_launcher: true,
    show_on_desktop: true,
};

const RPA_LAB: AppDescriptor = AppDescriptor {
    component: ComponentKind::RpaLab,
    slug: "rpa-lab",
    window_title: "RPA Lab",
    launcher_label: "RPA Lab",
    desktop_icon_label: "RPA Lab",
    glyph: "\u{1F916}",
    show_in_launcher: true,
    show_on_desktop: true,
};

const CONTROL_PANEL: AppDescriptor = AppDescriptor {
    component: ComponentKind::ControlPanel,
    slug: "control-panel",
    window_title: "Control Panel",
    launcher_label: "Control Panel",
    desktop_icon_label: "Control Panel",
    glyph: "\u{2699}",
    show_in_launcher: true,
    show_on_desktop: false,
};

const BILLING_APP: AppDescriptor = AppDescriptor {
    component: ComponentKind::BillingApp,
    slug: "billingapp",
    window_title: "Sistema POS/Boletas",
    launcher_label: "Billing",
    desktop_icon_label: "Billing",
    glyph: "\u{1F9FE}",
    show_in_launcher: false,
    show_on_desktop: false,
};

const APIBEE: AppDescriptor = AppDescriptor {
    component: ComponentKind::Apibee,
    slug: "apibee",
    window_title: "Apibee - Gamificaci\u{f3}n",
    launcher_label: "Apibee",
    desktop_icon_label: "Apibee",
    glyph: "\u{1F41D}",
    show_in_launcher: false,
    show_on_desktop: false,
};

const INTERACTIVE_LAB: AppDescriptor = AppDescriptor {
    component: ComponentKind::InteractiveLab,
    slug: "interactive-lab",
    window_title: "Interactive Lab",
    launcher_label: "Interactive Lab",
    desktop_icon_label: "Interactive Lab",
    glyph: "\u{1F9EA}",
    show_in_launcher: false,
    show_on_desktop: false,
};

const TEST_APP: AppDescriptor = AppDescriptor {
    component: ComponentKind::TestApp,
    slug: "test-app",
    window_title: "Test App",
    launcher_label: "Test App",
    desktop_icon_label: "Test App",
    glyph: "\u{1F9E9}",
    show_in_launcher: false,
    show_on_desktop: false,
};

// Launcher and desktop icons list entries in registry order.
const APP_REGISTRY: [AppDescriptor; 11] = [
    EXPLORER,
    NOTEPAD,
    CODE_SAMPLES,
    TERMINAL,
    API_DEMO,
    RPA_LAB,
    CONTROL_PANEL,
    BILLING_APP,
    APIBEE,
    INTERACTIVE_LAB,
    TEST_APP,
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Start-menu entries.
pub fn launcher_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_launcher)
        .collect()
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

pub fn app_descriptor(component: ComponentKind) -> &'static AppDescriptor {
    match component {
        ComponentKind::Explorer => &EXPLORER,
        ComponentKind::Notepad => &NOTEPAD,
        ComponentKind::CodeSamples => &CODE_SAMPLES,
        ComponentKind::Terminal => &TERMINAL,
        ComponentKind::ApiDemo => &API_DEMO,
        ComponentKind::RpaLab => &RPA_LAB,
        ComponentKind::ControlPanel => &CONTROL_PANEL,
        ComponentKind::BillingApp => &BILLING_APP,
        ComponentKind::Apibee => &APIBEE,
        ComponentKind::InteractiveLab => &INTERACTIVE_LAB,
        ComponentKind::TestApp => &TEST_APP,
    }
}
