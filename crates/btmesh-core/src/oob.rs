//! Provisioning out-of-band (OOB) authentication descriptors.
//!
//! Capabilities PDUs advertise supported algorithms and OOB actions as
//! bitmasks. The Provisioning Start PDU then selects one method and action
//! by index. Each enum here carries both encodings: `value()` is the
//! capability bit and `start_value()` is the index used in Provisioning
//! Start.
//!
//! Bitmask parsing walks each enum's variants in declaration order and
//! collects every variant whose bits are all set.

use std::fmt;

use rand::{Rng, RngCore};

use crate::error::OobError;

/// Length of the authentication value fed into the confirmation calculation.
pub const AUTH_VALUE_LENGTH: usize = 16;

/// Largest Input/Output OOB size in the Capabilities PDU.
pub const MAX_OOB_SIZE: u8 = 8;

const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmType {
    FipsP256EllipticCurve,
    BtmEcdhP256HmacSha256AesCcm,
}

impl AlgorithmType {
    const ALL: [AlgorithmType; 2] = [
        AlgorithmType::FipsP256EllipticCurve,
        AlgorithmType::BtmEcdhP256HmacSha256AesCcm,
    ];

    pub fn value(self) -> u16 {
        match self {
            AlgorithmType::FipsP256EllipticCurve => 0x0001,
            AlgorithmType::BtmEcdhP256HmacSha256AesCcm => 0x0002,
        }
    }

    pub fn start_value(self) -> u8 {
        match self {
            AlgorithmType::FipsP256EllipticCurve => 0x00,
            AlgorithmType::BtmEcdhP256HmacSha256AesCcm => 0x01,
        }
    }
}

pub fn parse_algorithm_types(bitmask: u16) -> Vec<AlgorithmType> {
    let algorithms: Vec<_> = AlgorithmType::ALL
        .into_iter()
        .filter(|a| bitmask & a.value() == a.value())
        .collect();
    tracing::trace!(bitmask, ?algorithms, "oob: parsed algorithms");
    algorithms
}

/// Static OOB availability from the Capabilities PDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticOobType {
    NotAvailable,
    Available,
}

impl StaticOobType {
    pub fn value(self) -> u8 {
        match self {
            StaticOobType::NotAvailable => 0x00,
            StaticOobType::Available => 0x01,
        }
    }

    pub fn from_bitmask(bitmask: u8) -> Self {
        if bitmask & 0x01 == 0x01 {
            StaticOobType::Available
        } else {
            StaticOobType::NotAvailable
        }
    }
}

/// Authentication method selected in Provisioning Start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AuthenticationOobMethod {
    NoOob = 0x00,
    StaticOob = 0x01,
    OutputOob = 0x02,
    InputOob = 0x03,
}

impl AuthenticationOobMethod {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(AuthenticationOobMethod::NoOob),
            0x01 => Some(AuthenticationOobMethod::StaticOob),
            0x02 => Some(AuthenticationOobMethod::OutputOob),
            0x03 => Some(AuthenticationOobMethod::InputOob),
            _ => None,
        }
    }
}

/// Action the user performs on the device to enter an input OOB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputOobAction {
    NoInput,
    Push,
    Twist,
    InputNumeric,
    InputAlphanumeric,
}

impl InputOobAction {
    const ACTIONS: [InputOobAction; 4] = [
        InputOobAction::Push,
        InputOobAction::Twist,
        InputOobAction::InputNumeric,
        InputOobAction::InputAlphanumeric,
    ];

    pub fn value(self) -> u16 {
        match self {
            InputOobAction::NoInput => 0x0000,
            InputOobAction::Push => 0x0001,
            InputOobAction::Twist => 0x0002,
            InputOobAction::InputNumeric => 0x0004,
            InputOobAction::InputAlphanumeric => 0x0008,
        }
    }

    pub fn from_value(value: u16) -> Option<Self> {
        match value {
            0x0000 => Some(InputOobAction::NoInput),
            0x0001 => Some(InputOobAction::Push),
            0x0002 => Some(InputOobAction::Twist),
            0x0004 => Some(InputOobAction::InputNumeric),
            0x0008 => Some(InputOobAction::InputAlphanumeric),
            _ => None,
        }
    }

    /// Index used in the Provisioning Start PDU. `NoInput` has none.
    pub fn start_value(self) -> Option<u8> {
        match self {
            InputOobAction::NoInput => None,
            InputOobAction::Push => Some(0x00),
            InputOobAction::Twist => Some(0x01),
            InputOobAction::InputNumeric => Some(0x02),
            InputOobAction::InputAlphanumeric => Some(0x03),
        }
    }
}

impl fmt::Display for InputOobAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputOobAction::NoInput => "no input",
            InputOobAction::Push => "push",
            InputOobAction::Twist => "twist",
            InputOobAction::InputNumeric => "input numeric",
            InputOobAction::InputAlphanumeric => "input alphanumeric",
        })
    }
}

pub fn parse_input_actions(bitmask: u16) -> Vec<InputOobAction> {
    let actions: Vec<_> = InputOobAction::ACTIONS
        .into_iter()
        .filter(|a| bitmask & a.value() == a.value())
        .collect();
    tracing::trace!(bitmask, ?actions, "oob: parsed input actions");
    actions
}

/// Action the device performs to present an output OOB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputOobAction {
    NoOutput,
    Blink,
    Beep,
    Vibrate,
    OutputNumeric,
    OutputAlphanumeric,
}

impl OutputOobAction {
    const ACTIONS: [OutputOobAction; 5] = [
        OutputOobAction::Blink,
        OutputOobAction::Beep,
        OutputOobAction::Vibrate,
        OutputOobAction::OutputNumeric,
        OutputOobAction::OutputAlphanumeric,
    ];

    pub fn value(self) -> u16 {
        match self {
            OutputOobAction::NoOutput => 0x0000,
            OutputOobAction::Blink => 0x0001,
            OutputOobAction::Beep => 0x0002,
            OutputOobAction::Vibrate => 0x0004,
            OutputOobAction::OutputNumeric => 0x0008,
            OutputOobAction::OutputAlphanumeric => 0x0010,
        }
    }

    /// Map a capability bit back to its action.
    ///
    /// Both `0x0002` and `0x0004` decode to `Vibrate`, so `Beep` is never
    /// produced here.
    pub fn from_value(value: u16) -> Option<Self> {
        match value {
            0x0000 => Some(OutputOobAction::NoOutput),
            0x0001 => Some(OutputOobAction::Blink),
            0x0002 | 0x0004 => Some(OutputOobAction::Vibrate),
            0x0008 => Some(OutputOobAction::OutputNumeric),
            0x0010 => Some(OutputOobAction::OutputAlphanumeric),
            _ => None,
        }
    }

    /// Index used in the Provisioning Start PDU. `NoOutput` has none.
    pub fn start_value(self) -> Option<u8> {
        match self {
            OutputOobAction::NoOutput => None,
            OutputOobAction::Blink => Some(0x00),
            OutputOobAction::Beep => Some(0x01),
            OutputOobAction::Vibrate => Some(0x02),
            OutputOobAction::OutputNumeric => Some(0x03),
            OutputOobAction::OutputAlphanumeric => Some(0x04),
        }
    }
}

impl fmt::Display for OutputOobAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputOobAction::NoOutput => "no output",
            OutputOobAction::Blink => "blink",
            OutputOobAction::Beep => "beep",
            OutputOobAction::Vibrate => "vibrate",
            OutputOobAction::OutputNumeric => "output numeric",
            OutputOobAction::OutputAlphanumeric => "output alphanumeric",
        })
    }
}

/// Matched actions are decoded through [`OutputOobAction::from_value`], so a
/// beep bit yields `Vibrate`.
pub fn parse_output_actions(bitmask: u16) -> Vec<OutputOobAction> {
    let actions: Vec<_> = OutputOobAction::ACTIONS
        .into_iter()
        .filter(|a| bitmask & a.value() == a.value())
        .filter_map(|a| OutputOobAction::from_value(a.value()))
        .collect();
    tracing::trace!(bitmask, ?actions, "oob: parsed output actions");
    actions
}

fn numeric_auth_value(number: u64) -> [u8; AUTH_VALUE_LENGTH] {
    let mut auth = [0u8; AUTH_VALUE_LENGTH];
    auth[8..].copy_from_slice(&number.to_be_bytes());
    auth
}

fn alphanumeric_auth_value(input: &str) -> Result<[u8; AUTH_VALUE_LENGTH], OobError> {
    if input.is_empty() || input.len() > AUTH_VALUE_LENGTH || !input.is_ascii() {
        return Err(OobError::InvalidAlphanumeric(input.to_owned()));
    }
    let mut auth = [0u8; AUTH_VALUE_LENGTH];
    auth[..input.len()].copy_from_slice(input.as_bytes());
    Ok(auth)
}

/// Authentication value for an input OOB action.
///
/// Push, twist and numeric input are entered as hex and stored big-endian in
/// the last 8 bytes. Alphanumeric input is stored as ASCII from offset 0.
///
/// # Errors
///
/// [`OobError::UnsupportedAction`] for `NoInput`, otherwise a parse error for
/// malformed input.
pub fn generate_input_auth_value(
    action: InputOobAction,
    input: &str,
) -> Result<[u8; AUTH_VALUE_LENGTH], OobError> {
    match action {
        InputOobAction::NoInput => Err(OobError::UnsupportedAction("no input")),
        InputOobAction::Push | InputOobAction::Twist | InputOobAction::InputNumeric => {
            let number = u64::from_str_radix(input, 16)
                .map_err(|_| OobError::InvalidNumber(input.to_owned()))?;
            Ok(numeric_auth_value(number))
        }
        InputOobAction::InputAlphanumeric => alphanumeric_auth_value(input),
    }
}

/// Authentication value for an output OOB action.
///
/// Blink, beep, vibrate and numeric output are read back as decimal.
/// Alphanumeric output is upper-cased before it is stored.
///
/// # Errors
///
/// [`OobError::UnsupportedAction`] for `NoOutput`, otherwise a parse error for
/// malformed input.
pub fn generate_output_auth_value(
    action: OutputOobAction,
    input: &str,
) -> Result<[u8; AUTH_VALUE_LENGTH], OobError> {
    match action {
        OutputOobAction::NoOutput => Err(OobError::UnsupportedAction("no output")),
        OutputOobAction::Blink
        | OutputOobAction::Beep
        | OutputOobAction::Vibrate
        | OutputOobAction::OutputNumeric => {
            let number: u64 = input
                .parse()
                .map_err(|_| OobError::InvalidNumber(input.to_owned()))?;
            Ok(numeric_auth_value(number))
        }
        OutputOobAction::OutputAlphanumeric => {
            alphanumeric_auth_value(&input.to_ascii_uppercase())
        }
    }
}

/// A value the provisioner asks the user to enter on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthInput {
    Number(u64),
    Alphanumeric(String),
}

impl AuthInput {
    pub fn auth_value(&self) -> [u8; AUTH_VALUE_LENGTH] {
        match self {
            AuthInput::Number(n) => numeric_auth_value(*n),
            AuthInput::Alphanumeric(s) => {
                let mut auth = [0u8; AUTH_VALUE_LENGTH];
                let len = s.len().min(AUTH_VALUE_LENGTH);
                auth[..len].copy_from_slice(&s.as_bytes()[..len]);
                auth
            }
        }
    }
}

impl fmt::Display for AuthInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthInput::Number(n) => write!(f, "{n}"),
            AuthInput::Alphanumeric(s) => f.write_str(s),
        }
    }
}

/// Pick a random input OOB value of `size` digits or characters.
///
/// Push and twist counts are never zero.
///
/// # Errors
///
/// [`OobError::InvalidSize`] unless `1 <= size <= 8`, and
/// [`OobError::UnsupportedAction`] for `NoInput`.
pub fn generate_random_auth_input<R: RngCore>(
    action: InputOobAction,
    size: u8,
    rng: &mut R,
) -> Result<AuthInput, OobError> {
    if !(1..=MAX_OOB_SIZE).contains(&size) {
        return Err(OobError::InvalidSize(size));
    }
    let upper = 10u64.pow(u32::from(size));
    match action {
        InputOobAction::NoInput => Err(OobError::UnsupportedAction("no input")),
        InputOobAction::Push | InputOobAction::Twist => {
            Ok(AuthInput::Number(rng.gen_range(1..upper)))
        }
        InputOobAction::InputNumeric => Ok(AuthInput::Number(rng.gen_range(0..upper))),
        InputOobAction::InputAlphanumeric => {
            let s = (0..size)
                .map(|_| char::from(ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())]))
                .collect();
            Ok(AuthInput::Alphanumeric(s))
        }
    }
}
