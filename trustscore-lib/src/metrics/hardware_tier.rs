use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * MIB;

/// A class of deployment hardware, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum HardwareTier {
    RaspberryPi,
    JetsonNano,
    DesktopPc,
    AwsServer,
}

impl HardwareTier {
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Largest total weight size, in bytes, that fits the tier comfortably.
    #[must_use]
    pub const fn max_bytes(self) -> f64 {
        match self {
            Self::RaspberryPi => 50.0 * MIB,
            Self::JetsonNano => 700.0 * MIB,
            Self::DesktopPc => 8.0 * GIB,
            Self::AwsServer => 100.0 * GIB,
        }
    }
}

/// Per-tier deployability scores.
///
/// Every tier is always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizeScores {
    pub raspberry_pi: f64,
    pub jetson_nano: f64,
    pub desktop_pc: f64,
    pub aws_server: f64,
}

impl SizeScores {
    /// Scores used when the model size is unknown: small devices get nothing, large machines are assumed to cope.
    pub const UNKNOWN: Self = Self {
        raspberry_pi: 0.0,
        jetson_nano: 0.0,
        desktop_pc: 1.0,
        aws_server: 1.0,
    };

    /// Scores used in place of a missing size result: every tier fits.
    pub const FULL: Self = Self {
        raspberry_pi: 1.0,
        jetson_nano: 1.0,
        desktop_pc: 1.0,
        aws_server: 1.0,
    };

    pub fn from_fn(mut f: impl FnMut(HardwareTier) -> f64) -> Self {
        Self {
            raspberry_pi: f(HardwareTier::RaspberryPi),
            jetson_nano: f(HardwareTier::JetsonNano),
            desktop_pc: f(HardwareTier::DesktopPc),
            aws_server: f(HardwareTier::AwsServer),
        }
    }

    #[must_use]
    pub const fn get(&self, tier: HardwareTier) -> f64 {
        match tier {
            HardwareTier::RaspberryPi => self.raspberry_pi,
            HardwareTier::JetsonNano => self.jetson_nano,
            HardwareTier::DesktopPc => self.desktop_pc,
            HardwareTier::AwsServer => self.aws_server,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (HardwareTier, f64)> + '_ {
        HardwareTier::iter().map(|tier| (tier, self.get(tier)))
    }

    #[must_use]
    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::from_fn(|tier| f(self.get(tier)))
    }

    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "the tier count is tiny")]
    pub fn mean(&self) -> f64 {
        self.iter().map(|(_, score)| score).sum::<f64>() / HardwareTier::COUNT as f64
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.iter().all(|(_, score)| score.is_finite())
    }
}
