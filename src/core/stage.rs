//! Visitor journey state machine.
//!
//! `SceneState` is the single source of truth for which stage the visitor is
//! in, which scene labels are mounted and how opaque they are. User input
//! enters through [`SceneState::advance`]; time-driven progress through
//! [`SceneState::update`] and [`SceneState::flight_completed`]. Every entry
//! point returns the effects the frame loop must apply.

use super::constants::FADE_RATE_PER_SEC;
use super::fade::Fade;
use smallvec::SmallVec;

/// Content section reachable from the navigation labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Work,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Work, Section::About, Section::Contact];

    pub fn slug(self) -> &'static str {
        match self {
            Section::Work => "work",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Section> {
        match slug {
            "work" => Some(Section::Work),
            "about" => Some(Section::About),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewStage {
    Entry,
    TransitioningToPortfolio,
    Portfolio,
    NavigationVisible,
    PanelOpen(Section),
}

impl ViewStage {
    /// Position along the journey; panels share the last slot.
    pub fn ordinal(self) -> u8 {
        match self {
            ViewStage::Entry => 0,
            ViewStage::TransitioningToPortfolio => 1,
            ViewStage::Portfolio => 2,
            ViewStage::NavigationVisible => 3,
            ViewStage::PanelOpen(_) => 4,
        }
    }
}

/// User input alphabet. Anything else the page sees is ignored upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageEvent {
    ClickEntry,
    ClickPortfolio,
    SelectSection(Section),
    ClosePanel,
}

/// A clickable piece of scene text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Enter,
    Portfolio,
    Nav(Section),
}

impl Label {
    pub fn text(self) -> &'static str {
        match self {
            Label::Enter => "ENTER",
            Label::Portfolio => "PORTFOLIO",
            Label::Nav(Section::Work) => "WORK",
            Label::Nav(Section::About) => "ABOUT",
            Label::Nav(Section::Contact) => "CONTACT",
        }
    }

    /// Event fired when the label is clicked.
    pub fn event(self) -> StageEvent {
        match self {
            Label::Enter => StageEvent::ClickEntry,
            Label::Portfolio => StageEvent::ClickPortfolio,
            Label::Nav(s) => StageEvent::SelectSection(s),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEffect {
    StageChanged(ViewStage),
    /// Start the scripted camera flight toward the portfolio text.
    BeginFlight,
    PanelOpened(Section),
    PanelClosed,
}

pub type SceneEffects = SmallVec<[SceneEffect; 4]>;

#[derive(Clone, Debug)]
pub struct SceneState {
    stage: ViewStage,
    enter: Fade,
    portfolio: Fade,
    enter_mounted: bool,
    portfolio_mounted: bool,
    nav_mounted: bool,
    portfolio_dismissing: bool,
    /// PORTFOLIO clicked while the entry flight was still running.
    portfolio_click_pending: bool,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            stage: ViewStage::Entry,
            enter: Fade::at(1.0, FADE_RATE_PER_SEC),
            portfolio: Fade::at(1.0, FADE_RATE_PER_SEC),
            enter_mounted: true,
            portfolio_mounted: false,
            nav_mounted: false,
            portfolio_dismissing: false,
            portfolio_click_pending: false,
        }
    }

    pub fn stage(&self) -> ViewStage {
        self.stage
    }

    /// Apply a user event. Events that are not valid in the current stage
    /// leave the state untouched and return no effects.
    pub fn advance(&mut self, event: StageEvent) -> SceneEffects {
        let mut fx = SceneEffects::new();
        match (self.stage, event) {
            (ViewStage::Entry, StageEvent::ClickEntry) => {
                self.enter.fade_to(0.0);
                self.portfolio_mounted = true;
                self.portfolio.set(0.0);
                self.portfolio.fade_to(1.0);
                self.set_stage(ViewStage::TransitioningToPortfolio, &mut fx);
                fx.push(SceneEffect::BeginFlight);
            }
            (ViewStage::TransitioningToPortfolio, StageEvent::ClickPortfolio) => {
                // honoured once the camera lands
                self.portfolio_click_pending = true;
            }
            (ViewStage::Portfolio, StageEvent::ClickPortfolio) => self.dismiss_portfolio(),
            (ViewStage::NavigationVisible, StageEvent::SelectSection(s)) => {
                self.set_stage(ViewStage::PanelOpen(s), &mut fx);
                fx.push(SceneEffect::PanelOpened(s));
            }
            (ViewStage::PanelOpen(_), StageEvent::ClosePanel) => {
                self.set_stage(ViewStage::NavigationVisible, &mut fx);
                fx.push(SceneEffect::PanelClosed);
            }
            _ => {}
        }
        fx
    }

    /// Advance fades and perform the transitions they gate.
    pub fn update(&mut self, dt_sec: f32) -> SceneEffects {
        let mut fx = SceneEffects::new();
        self.enter.tick(dt_sec);
        self.portfolio.tick(dt_sec);

        if self.enter_mounted && self.enter.target() == 0.0 && self.enter.is_settled() {
            self.enter_mounted = false;
        }
        if self.portfolio_dismissing && self.portfolio.is_settled() {
            self.portfolio_dismissing = false;
            self.portfolio_mounted = false;
            self.nav_mounted = true;
            self.set_stage(ViewStage::NavigationVisible, &mut fx);
        }
        fx
    }

    /// The camera flight started by `ClickEntry` has landed.
    pub fn flight_completed(&mut self) -> SceneEffects {
        let mut fx = SceneEffects::new();
        if self.stage == ViewStage::TransitioningToPortfolio {
            self.set_stage(ViewStage::Portfolio, &mut fx);
            if std::mem::take(&mut self.portfolio_click_pending) {
                self.dismiss_portfolio();
            }
        }
        fx
    }

    /// The top navigation bar is only offered alongside the navigation words.
    pub fn nav_bar_visible(&self) -> bool {
        self.nav_mounted
    }

    pub fn active_panel(&self) -> Option<Section> {
        match self.stage {
            ViewStage::PanelOpen(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_mounted(&self, label: Label) -> bool {
        match label {
            Label::Enter => self.enter_mounted,
            Label::Portfolio => self.portfolio_mounted,
            Label::Nav(_) => self.nav_mounted,
        }
    }

    pub fn mounted_labels(&self) -> SmallVec<[Label; 4]> {
        let mut out = SmallVec::new();
        if self.enter_mounted {
            out.push(Label::Enter);
        }
        if self.portfolio_mounted {
            out.push(Label::Portfolio);
        }
        if self.nav_mounted {
            out.extend(Section::ALL.iter().map(|s| Label::Nav(*s)));
        }
        out
    }

    /// Current opacity of a label; unmounted labels report 0.
    pub fn label_opacity(&self, label: Label) -> f32 {
        if !self.is_mounted(label) {
            return 0.0;
        }
        match label {
            Label::Enter => self.enter.value(),
            Label::Portfolio => self.portfolio.value(),
            Label::Nav(_) => 1.0,
        }
    }

    /// Instruction prompt for the bottom of the screen, hidden while a panel is open.
    pub fn prompt(&self) -> Option<&'static str> {
        if self.active_panel().is_some() {
            return None;
        }
        if self.nav_mounted {
            Some("Click WORK, ABOUT, or CONTACT • Use ← → arrow keys to rotate")
        } else if self.portfolio_mounted {
            Some("Click PORTFOLIO • Use ← → arrow keys to rotate")
        } else if self.enter_mounted {
            Some("Click ENTER")
        } else {
            None
        }
    }

    fn dismiss_portfolio(&mut self) {
        if !self.portfolio_dismissing {
            self.portfolio_dismissing = true;
            self.portfolio.fade_to(0.0);
        }
    }

    fn set_stage(&mut self, next: ViewStage, fx: &mut SceneEffects) {
        if self.stage != next {
            log::info!("[stage] {:?} -> {:?}", self.stage, next);
            self.stage = next;
            fx.push(SceneEffect::StageChanged(next));
        }
    }
}
