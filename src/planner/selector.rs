use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{MealCombo, MealSlot, MenuItem};
use crate::planner::catalog::MenuCatalog;
use crate::planner::constants::{DEFAULT_TRIALS, EXHAUSTIVE_LIMIT};

/// How the selector explores the combination space.
///
/// Sampling draws from a generator seeded with the given value, so equal
/// seeds reproduce the search exactly. Both plan shapes are fed from the
/// same trial stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Visit every combination; guarantees the closest match.
    Exhaustive,

    /// Draw `trials` random combinations from a seeded generator.
    Sampled { trials: usize, seed: u64 },

    /// `Exhaustive` while the cross-product stays within
    /// `EXHAUSTIVE_LIMIT`, `Sampled` beyond it.
    Auto { trials: usize, seed: u64 },
}

impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::Auto {
            trials: DEFAULT_TRIALS,
            seed: 0,
        }
    }
}

/// Best candidates found for each plan shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboSelection {
    pub three_meal: Option<MealCombo>,
    pub two_meal: Option<MealCombo>,
}

impl ComboSelection {
    /// Whether neither shape produced a candidate.
    pub fn is_empty(&self) -> bool {
        self.three_meal.is_none() && self.two_meal.is_none()
    }
}

/// Search the catalog pools for the calorie-closest combination per plan
/// shape.
///
/// Requires populated lunch and dinner pools; otherwise both results stay
/// absent. With an empty breakfast pool only the two-meal shape is
/// produced. A candidate replaces the running best only on a strictly
/// smaller distance to the target, so equally-close combinations keep the
/// earliest-found winner (for `Exhaustive` that order is breakfast-major,
/// then lunch, then dinner, each pool in input order).
pub fn select_combos(
    catalog: &MenuCatalog,
    target_calories: u32,
    strategy: SearchStrategy,
) -> ComboSelection {
    let breakfast = catalog.pool(MealSlot::Breakfast);
    let lunch = catalog.pool(MealSlot::Lunch);
    let dinner = catalog.pool(MealSlot::Dinner);

    if lunch.is_empty() || dinner.is_empty() {
        return ComboSelection::default();
    }

    match strategy {
        SearchStrategy::Exhaustive => exhaustive_search(breakfast, lunch, dinner, target_calories),
        SearchStrategy::Sampled { trials, seed } => {
            sampled_search(breakfast, lunch, dinner, target_calories, trials, seed)
        }
        SearchStrategy::Auto { trials, seed } => {
            if cross_product_size(breakfast, lunch, dinner) <= EXHAUSTIVE_LIMIT {
                exhaustive_search(breakfast, lunch, dinner, target_calories)
            } else {
                sampled_search(breakfast, lunch, dinner, target_calories, trials, seed)
            }
        }
    }
}

/// Number of combinations the exhaustive strategy would visit.
fn cross_product_size(breakfast: &[MenuItem], lunch: &[MenuItem], dinner: &[MenuItem]) -> u64 {
    (breakfast.len().max(1) as u64)
        .saturating_mul(lunch.len() as u64)
        .saturating_mul(dinner.len() as u64)
}

/// Absolute calorie distance from the target.
///
/// Sums are accumulated in `u64` so pathological catalog values cannot
/// wrap the objective.
#[inline]
fn distance(target: u32, calories: u64) -> u64 {
    (i64::from(target) - calories as i64).unsigned_abs()
}

fn exhaustive_search(
    breakfast: &[MenuItem],
    lunch: &[MenuItem],
    dinner: &[MenuItem],
    target: u32,
) -> ComboSelection {
    let mut best_two: Option<(u64, usize, usize)> = None;
    for (li, l) in lunch.iter().enumerate() {
        for (di, d) in dinner.iter().enumerate() {
            let dist = distance(target, u64::from(l.calories) + u64::from(d.calories));
            if best_two.is_none_or(|(best, _, _)| dist < best) {
                best_two = Some((dist, li, di));
            }
        }
    }

    let mut best_three: Option<(u64, usize, usize, usize)> = None;
    for (bi, b) in breakfast.iter().enumerate() {
        for (li, l) in lunch.iter().enumerate() {
            for (di, d) in dinner.iter().enumerate() {
                let dist = distance(
                    target,
                    u64::from(b.calories) + u64::from(l.calories) + u64::from(d.calories),
                );
                if best_three.is_none_or(|(best, _, _, _)| dist < best) {
                    best_three = Some((dist, bi, li, di));
                }
            }
        }
    }

    build_selection(breakfast, lunch, dinner, best_three, best_two)
}

fn sampled_search(
    breakfast: &[MenuItem],
    lunch: &[MenuItem],
    dinner: &[MenuItem],
    target: u32,
    trials: usize,
    seed: u64,
) -> ComboSelection {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut best_two: Option<(u64, usize, usize)> = None;
    let mut best_three: Option<(u64, usize, usize, usize)> = None;

    for _ in 0..trials {
        // Draw order is fixed: breakfast (when present), lunch, dinner.
        let bi = if breakfast.is_empty() {
            None
        } else {
            Some(rng.gen_range(0..breakfast.len()))
        };
        let li = rng.gen_range(0..lunch.len());
        let di = rng.gen_range(0..dinner.len());

        let pair_calories = u64::from(lunch[li].calories) + u64::from(dinner[di].calories);
        let two_dist = distance(target, pair_calories);
        if best_two.is_none_or(|(best, _, _)| two_dist < best) {
            best_two = Some((two_dist, li, di));
        }

        if let Some(bi) = bi {
            let three_dist = distance(target, u64::from(breakfast[bi].calories) + pair_calories);
            if best_three.is_none_or(|(best, _, _, _)| three_dist < best) {
                best_three = Some((three_dist, bi, li, di));
            }
        }
    }

    build_selection(breakfast, lunch, dinner, best_three, best_two)
}

fn build_selection(
    breakfast: &[MenuItem],
    lunch: &[MenuItem],
    dinner: &[MenuItem],
    best_three: Option<(u64, usize, usize, usize)>,
    best_two: Option<(u64, usize, usize)>,
) -> ComboSelection {
    ComboSelection {
        three_meal: best_three.map(|(_, bi, li, di)| {
            MealCombo::new(
                Some(breakfast[bi].clone()),
                lunch[li].clone(),
                dinner[di].clone(),
            )
        }),
        two_meal: best_two
            .map(|(_, li, di)| MealCombo::new(None, lunch[li].clone(), dinner[di].clone())),
    }
}
