//! Player bookkeeping
//!
//! The board reports captures; this is where they turn into coupons and
//! entitlements.

use serde::{Deserialize, Serialize};

use crate::types::{BonusKind, CaptureEvent, PlayerId, STARTING_EXCHANGE_COUPONS};

/// Name and color supplied by whoever collects player details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub color: String,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    id: PlayerId,
    name: String,
    color: String,
    exchange_coupons: u32,
    /// A captured stone that must be placed before the next draw
    stone_pending: bool,
    steal_available: bool,
}

impl PlayerState {
    pub fn new(id: PlayerId, profile: PlayerProfile) -> Self {
        Self {
            id,
            name: profile.name,
            color: profile.color,
            exchange_coupons: STARTING_EXCHANGE_COUPONS,
            stone_pending: false,
            steal_available: false,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn exchange_coupons(&self) -> u32 {
        self.exchange_coupons
    }

    pub fn stone_pending(&self) -> bool {
        self.stone_pending
    }

    pub fn steal_available(&self) -> bool {
        self.steal_available
    }

    /// Grant whatever the captured bonus is worth
    pub fn apply_capture(&mut self, event: &CaptureEvent) {
        match event.kind {
            BonusKind::Exchange => self.exchange_coupons += 1,
            BonusKind::Stone => self.stone_pending = true,
            BonusKind::Steal => self.steal_available = true,
        }
    }

    /// Spend one coupon; false when none are left
    pub fn use_exchange_coupon(&mut self) -> bool {
        if self.exchange_coupons == 0 {
            return false;
        }
        self.exchange_coupons -= 1;
        true
    }

    pub(crate) fn clear_stone(&mut self) {
        self.stone_pending = false;
    }
}
