//! Heartbeat publication and subscription state.
//!
//! Heartbeat periods and counts travel as 1-byte logarithms:
//!
//! | log          | value            |
//! |--------------|------------------|
//! | `0x00`       | 0 (disabled)     |
//! | `0x01..0x10` | `2^(log-1)`      |
//! | `0x11`       | `0x10000` period, `0xFFFE` count |
//! | `0xFF`       | count only: indefinite (`0xFFFF`) |
//!
//! Validators here follow the validate-or-reject convention of
//! [`crate::validation`].

use std::time::Duration;

use bitflags::bitflags;

use crate::address::{
    is_valid_heartbeat_publication_destination, is_valid_heartbeat_subscription_destination,
    is_valid_heartbeat_subscription_source,
};
use crate::constants::{MAX_TTL, UNASSIGNED_ADDRESS};
use crate::error::ValidationError;
use crate::validation::is_valid_key_index;

pub const MAX_PERIOD_LOG: u8 = 0x11;
pub const MAX_COUNT_LOG: u8 = 0x11;
/// Count log meaning "publish indefinitely".
pub const INDEFINITE_COUNT_LOG: u8 = 0xFF;
/// Largest period a Heartbeat Subscription Set can carry.
pub const MAX_PERIOD: u16 = 0xFFFF;
/// Period for log `0x11`.
const MAX_LOG_PERIOD: u32 = 1 << 16;
const MAX_FINITE_COUNT: u16 = 0xFFFE;
const INDEFINITE_COUNT: u16 = 0xFFFF;

bitflags! {
    /// Features whose state change triggers a heartbeat publication.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HeartbeatFeatures: u16 {
        const RELAY = 0x0001;
        const PROXY = 0x0002;
        const FRIEND = 0x0004;
        const LOW_POWER = 0x0008;
    }
}

// Callers validate the log before calling these two.
fn period_from_log(period_log: u8) -> u32 {
    match period_log {
        0x00 => 0,
        0x01..=0x10 => 1 << (period_log - 1),
        _ => MAX_LOG_PERIOD,
    }
}

fn count_from_log(count_log: u8) -> u16 {
    match count_log {
        0x00 => 0,
        0x01..=0x10 => 1 << (count_log - 1),
        MAX_COUNT_LOG => MAX_FINITE_COUNT,
        _ => INDEFINITE_COUNT,
    }
}

/// # Errors
///
/// Rejects periods above `0xFFFF` seconds.
pub fn is_valid_heartbeat_period(period: u32) -> Result<bool, ValidationError> {
    if period <= u32::from(MAX_PERIOD) {
        Ok(true)
    } else {
        Err(ValidationError::invalid(format!(
            "heartbeat period {period} exceeds 0xFFFF seconds"
        )))
    }
}

/// # Errors
///
/// Rejects logs above `0x11`.
pub fn is_valid_heartbeat_period_log(period_log: u8) -> Result<bool, ValidationError> {
    if period_log <= MAX_PERIOD_LOG {
        Ok(true)
    } else {
        Err(ValidationError::invalid(format!(
            "heartbeat period log 0x{period_log:02X} is out of range"
        )))
    }
}

/// # Errors
///
/// Rejects logs in `0x12..=0xFE`.
pub fn is_valid_heartbeat_count_log(count_log: u8) -> Result<bool, ValidationError> {
    if count_log <= MAX_COUNT_LOG || count_log == INDEFINITE_COUNT_LOG {
        Ok(true)
    } else {
        Err(ValidationError::invalid(format!(
            "heartbeat count log 0x{count_log:02X} is out of range"
        )))
    }
}

/// # Errors
///
/// Rejects TTLs above `0x7F`.
pub fn is_valid_heartbeat_publication_ttl(ttl: u8) -> Result<bool, ValidationError> {
    if ttl <= MAX_TTL {
        Ok(true)
    } else {
        Err(ValidationError::invalid(format!(
            "heartbeat publication TTL 0x{ttl:02X} is out of range"
        )))
    }
}

/// Period in seconds for `period_log`.
pub fn calculate_heartbeat_period(period_log: u8) -> Result<u32, ValidationError> {
    is_valid_heartbeat_period_log(period_log)?;
    Ok(period_from_log(period_log))
}

/// Smallest log whose period covers `period`.
///
/// `0xFFFF`, the largest 16-bit period, maps to `0x11`. Periods beyond
/// `0x10000` saturate at `0x11`.
pub fn decode_heartbeat_period(period: u32) -> u8 {
    match period {
        0 => 0x00,
        p if p == u32::from(MAX_PERIOD) => MAX_PERIOD_LOG,
        _ => ((u32::BITS - period.leading_zeros()) as u8).min(MAX_PERIOD_LOG),
    }
}

/// Number of heartbeats for `count_log`.
///
/// # Errors
///
/// Rejects logs in `0x12..=0xFE`.
pub fn calculate_heartbeat_count(count_log: u8) -> Result<u16, ValidationError> {
    is_valid_heartbeat_count_log(count_log)?;
    Ok(count_from_log(count_log))
}

pub fn decode_heartbeat_count(count: u16) -> u8 {
    match count {
        0 => 0x00,
        MAX_FINITE_COUNT => MAX_COUNT_LOG,
        INDEFINITE_COUNT => INDEFINITE_COUNT_LOG,
        _ => (u16::BITS - count.leading_zeros()) as u8,
    }
}

/// State shared by heartbeat publication and subscription.
pub trait Heartbeat {
    fn dst(&self) -> u16;
    fn period_log(&self) -> u8;
    fn count_log(&self) -> u8;
    fn is_enabled(&self) -> bool;

    fn period(&self) -> u32 {
        period_from_log(self.period_log())
    }

    fn count(&self) -> u16 {
        count_from_log(self.count_log())
    }

    /// Human-readable period such as `"1h 4m"`.
    fn period_description(&self) -> String {
        match self.period() {
            0 => "disabled".to_owned(),
            secs => humantime::format_duration(Duration::from_secs(u64::from(secs))).to_string(),
        }
    }

    fn count_description(&self) -> String {
        match self.count_log() {
            0x00 => "disabled".to_owned(),
            INDEFINITE_COUNT_LOG => "indefinitely".to_owned(),
            _ => self.count().to_string(),
        }
    }
}

/// Heartbeat Publication state of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatPublication {
    dst: u16,
    count_log: u8,
    period_log: u8,
    ttl: u8,
    features: HeartbeatFeatures,
    net_key_index: u16,
}

impl HeartbeatPublication {
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any field is out of range or `dst` is a
    /// virtual or RFU address.
    pub fn new(
        dst: u16,
        count_log: u8,
        period_log: u8,
        ttl: u8,
        features: HeartbeatFeatures,
        net_key_index: u16,
    ) -> Result<Self, ValidationError> {
        if !is_valid_heartbeat_publication_destination(u32::from(dst)) {
            return Err(ValidationError::invalid(format!(
                "0x{dst:04X} is not a valid heartbeat publication destination"
            )));
        }
        is_valid_heartbeat_count_log(count_log)?;
        is_valid_heartbeat_period_log(period_log)?;
        is_valid_heartbeat_publication_ttl(ttl)?;
        if is_valid_key_index(u32::from(net_key_index)) {
            return Err(ValidationError::invalid(format!(
                "NetKey index 0x{net_key_index:X} exceeds 12 bits"
            )));
        }

        tracing::debug!(
            dst,
            count_log,
            period_log,
            ttl,
            features = features.bits(),
            net_key_index,
            "heartbeat: publication configured"
        );
        Ok(Self {
            dst,
            count_log,
            period_log,
            ttl,
            features,
            net_key_index,
        })
    }

    pub fn ttl(&self) -> u8 {
        self.ttl
    }

    pub fn features(&self) -> HeartbeatFeatures {
        self.features
    }

    pub fn net_key_index(&self) -> u16 {
        self.net_key_index
    }
}

impl Heartbeat for HeartbeatPublication {
    fn dst(&self) -> u16 {
        self.dst
    }

    fn period_log(&self) -> u8 {
        self.period_log
    }

    fn count_log(&self) -> u8 {
        self.count_log
    }

    fn is_enabled(&self) -> bool {
        self.dst != UNASSIGNED_ADDRESS
    }
}

/// Heartbeat Subscription state of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatSubscription {
    src: u16,
    dst: u16,
    period_log: u8,
    count_log: u8,
    min_hops: u8,
    max_hops: u8,
}

impl HeartbeatSubscription {
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an illegal source or destination, an
    /// out-of-range log, or hop counts above `0x7F`.
    pub fn new(
        src: u16,
        dst: u16,
        period_log: u8,
        count_log: u8,
        min_hops: u8,
        max_hops: u8,
    ) -> Result<Self, ValidationError> {
        is_valid_heartbeat_subscription_source(u32::from(src))?;
        is_valid_heartbeat_subscription_destination(u32::from(dst))?;
        is_valid_heartbeat_period_log(period_log)?;
        is_valid_heartbeat_count_log(count_log)?;
        if min_hops > MAX_TTL || max_hops > MAX_TTL {
            return Err(ValidationError::invalid(format!(
                "heartbeat hops {min_hops}..{max_hops} exceed 0x7F"
            )));
        }

        tracing::debug!(src, dst, period_log, count_log, "heartbeat: subscription configured");
        Ok(Self {
            src,
            dst,
            period_log,
            count_log,
            min_hops,
            max_hops,
        })
    }

    pub fn src(&self) -> u16 {
        self.src
    }

    pub fn min_hops(&self) -> u8 {
        self.min_hops
    }

    pub fn max_hops(&self) -> u8 {
        self.max_hops
    }
}

impl Heartbeat for HeartbeatSubscription {
    fn dst(&self) -> u16 {
        self.dst
    }

    fn period_log(&self) -> u8 {
        self.period_log
    }

    fn count_log(&self) -> u8 {
        self.count_log
    }

    fn is_enabled(&self) -> bool {
        self.src != UNASSIGNED_ADDRESS && self.dst != UNASSIGNED_ADDRESS
    }
}
