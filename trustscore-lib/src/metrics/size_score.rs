//! Size score: how well the model's weights fit each class of hardware.

use super::{HardwareTier, MetricValue, SizeScores};
use crate::Result;
use crate::context::{Context, keys};
use ohno::bail;

/// Multiple of a tier's threshold over which the score decays to zero.
const DECAY_SPAN: f64 = 10.0;

pub fn score(context: &Context) -> Result<MetricValue> {
    let scores = match context.number(keys::WEIGHTS_TOTAL_BYTES)? {
        Some(bytes) if bytes < 0.0 => bail!("weights_total_bytes must not be negative, found {bytes}"),
        Some(bytes) => SizeScores::from_fn(|tier| tier_score(tier, bytes)),
        None => SizeScores::UNKNOWN,
    };

    Ok(MetricValue::Tiers(scores))
}

fn tier_score(tier: HardwareTier, bytes: f64) -> f64 {
    let threshold = tier.max_bytes();
    if bytes <= threshold {
        1.0
    } else {
        (1.0 - (bytes - threshold) / (DECAY_SPAN * threshold)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: f64 = 1024.0 * 1024.0;
    const GIB: f64 = 1024.0 * MIB;

    fn tiers_for(bytes: f64) -> SizeScores {
        let context: Context = [(keys::WEIGHTS_TOTAL_BYTES, bytes)].into_iter().collect();
        *score(&context).unwrap().as_tiers().unwrap()
    }

    #[test]
    fn test_small_model_fits_everywhere() {
        let tiers = tiers_for(10.0 * MIB);
        assert!(tiers.iter().all(|(_, score)| (score - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_partial_decay() {
        // 100 MiB is 50 MiB over the Raspberry Pi threshold: 1 - 50 / 500
        let tiers = tiers_for(100.0 * MIB);
        assert!((tiers.raspberry_pi - 0.9).abs() < 1e-9);
        assert!((tiers.jetson_nano - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_large_model() {
        let tiers = tiers_for(20.0 * GIB);
        assert!(tiers.raspberry_pi.abs() < f64::EPSILON);
        assert!(tiers.jetson_nano.abs() < f64::EPSILON);
        assert!((tiers.desktop_pc - 0.85).abs() < 1e-9);
        assert!((tiers.aws_server - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_size() {
        let tiers = *score(&Context::new()).unwrap().as_tiers().unwrap();
        assert_eq!(tiers, SizeScores::UNKNOWN);
    }

    #[test]
    fn test_zero_bytes_fits_everywhere() {
        assert!(tiers_for(0.0).iter().all(|(_, score)| (score - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_negative_size_is_malformed() {
        let context: Context = [(keys::WEIGHTS_TOTAL_BYTES, -1.0)].into_iter().collect();
        let _ = score(&context).unwrap_err();
    }

    #[test]
    fn test_scores_never_increase_with_size() {
        let sizes = [1.0, 60.0 * MIB, 800.0 * MIB, 9.0 * GIB, 200.0 * GIB, 5000.0 * GIB];
        let all: Vec<_> = sizes.iter().map(|bytes| tiers_for(*bytes)).collect();
        for tier in [HardwareTier::RaspberryPi, HardwareTier::JetsonNano, HardwareTier::DesktopPc, HardwareTier::AwsServer] {
            assert!(all.windows(2).all(|w| w[0].get(tier) >= w[1].get(tier)), "{tier}");
            assert!(all.iter().all(|t| (0.0..=1.0).contains(&t.get(tier))), "{tier}");
        }
    }
}
