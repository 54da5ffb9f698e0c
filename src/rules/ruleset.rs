use serde::{Deserialize, Serialize};

/// How kings move when not capturing (and how far they may be from the piece they capture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KingMovement {
    /// Slide any distance along an empty diagonal (international draughts).
    Flying,
    /// One cell in any diagonal direction.
    Stepping,
}

/// Where a flying king may land after jumping a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KingLanding {
    /// Any empty cell beyond the captured piece, up to the next obstruction.
    AnyBeyond,
    /// Only the cell immediately beyond the captured piece.
    Adjacent,
}

/// Which captures are mandatory when at least one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureRule {
    /// Any complete capture chain may be played.
    AnyCapture,
    /// Only the chains capturing the most pieces may be played.
    LongestChain,
}

/// The rule-family choices the move generator is parameterised over.
///
/// Rules that are fixed for every variant supported here:
/// - men step forward only, one cell;
/// - a capture chain must be continued while the piece can still capture;
/// - pieces jumped during a chain stay on the board until the chain ends and cannot be jumped twice;
/// - a man is promoted only when the whole move ends on its promotion row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub king_movement: KingMovement,
    pub king_landing: KingLanding,
    pub capture_rule: CaptureRule,
    pub men_capture_backward: bool,
}

impl RuleSet {
    /// International draughts with "any capture is mandatory, not necessarily the longest".
    pub const fn international() -> Self {
        Self {
            king_movement: KingMovement::Flying,
            king_landing: KingLanding::AnyBeyond,
            capture_rule: CaptureRule::AnyCapture,
            men_capture_backward: true,
        }
    }

    pub fn with_king_movement(mut self, movement: KingMovement) -> Self {
        self.king_movement = movement;
        self
    }

    pub fn with_king_landing(mut self, landing: KingLanding) -> Self {
        self.king_landing = landing;
        self
    }

    pub fn with_capture_rule(mut self, rule: CaptureRule) -> Self {
        self.capture_rule = rule;
        self
    }

    pub fn with_men_capture_backward(mut self, allowed: bool) -> Self {
        self.men_capture_backward = allowed;
        self
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::international()
    }
}
