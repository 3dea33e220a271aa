use log::{debug, warn};

use crate::constants::{DEFAULT_PRIZE_TEXT, WHEEL_SLOTS};
use crate::prize_list::PRIZE_PALETTE;
use crate::shared_prize_wheel::{ApiPrize, Prize, RouletteConfig, WheelConfiguration};

/// Turns the remote wheel configuration into what the wheel displays.
///
/// Inactive prizes are dropped, the rest are ordered by id and repeated until
/// the wheel has exactly [`WHEEL_SLOTS`] segments. Each slot gets the id
/// `"{api_id}-{slot}"` so the remote winner can be matched back to a segment.
pub fn transform_config(config: &RouletteConfig) -> WheelConfiguration {
    let mut active: Vec<&ApiPrize> = config.prizes.iter().filter(|prize| prize.active).collect();
    active.sort_by_key(|prize| prize.id);

    let mut prizes: Vec<Prize> = if active.is_empty() {
        warn!("Wheel {} has no active prizes, using placeholders", config.wheel.id);
        (0..WHEEL_SLOTS)
            .map(|slot| Prize {
                id: format!("default-{}", slot),
                text: DEFAULT_PRIZE_TEXT.to_string(),
                color: String::new(),
                probability: Some(100.0 / WHEEL_SLOTS as f64),
                positive: None,
            })
            .collect()
    } else {
        (0..WHEEL_SLOTS)
            .map(|slot| {
                let source = active[slot % active.len()];
                Prize {
                    id: format!("{}-{}", source.id, slot),
                    text: source.name.clone(),
                    color: String::new(),
                    probability: Some(source.probability),
                    positive: Some(source.positive),
                }
            })
            .collect()
    };

    let colors = company_colors(config);
    for (slot, prize) in prizes.iter_mut().enumerate() {
        prize.color = colors[slot % colors.len()].clone();
    }

    debug!(
        "Wheel {} configured with {} slots: {:?}",
        config.wheel.id,
        prizes.len(),
        prizes.iter().map(|prize| prize.id.as_str()).collect::<Vec<_>>()
    );

    WheelConfiguration {
        colors,
        logo: config.company.logo.clone(),
        prizes,
    }
}

fn company_colors(config: &RouletteConfig) -> Vec<String> {
    let colors: Vec<String> = [
        &config.company.primary_color,
        &config.company.secondary_color,
        &config.company.tertiary_color,
    ]
    .into_iter()
    .filter(|color| !color.trim().is_empty())
    .cloned()
    .collect();

    if colors.is_empty() {
        PRIZE_PALETTE.iter().take(3).map(|color| color.to_string()).collect()
    } else {
        colors
    }
}

/// Remote prize id a wheel slot was built from, if it has one.
pub fn source_prize_id(prize: &Prize) -> Option<i64> {
    prize.id.split('-').next()?.parse().ok()
}

/// First slot showing the remote prize `api_id`.
pub fn find_prize_index_by_id(prizes: &[Prize], api_id: i64) -> Option<usize> {
    prizes.iter().position(|prize| source_prize_id(prize) == Some(api_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_prize_wheel::{Company, Wheel};

    fn api_prize(id: i64, name: &str, active: bool, positive: bool) -> ApiPrize {
        ApiPrize {
            id,
            name: name.to_string(),
            description: String::new(),
            probability: 25.0,
            available: 10,
            delivered: 0,
            limit_per_minutes: 0,
            positive,
            wheel_id: 1,
            active,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn config(prizes: Vec<ApiPrize>) -> RouletteConfig {
        RouletteConfig {
            wheel: Wheel {
                id: 1,
                name: "Ruleta".to_string(),
                description: String::new(),
                company_id: 3,
                active: true,
                created_at: String::new(),
                updated_at: String::new(),
            },
            company: Company {
                id: 3,
                name: "D3".to_string(),
                logo: "https://cdn.example.com/logo.png".to_string(),
                primary_color: "#CD0303".to_string(),
                secondary_color: "#2F4F4F".to_string(),
                tertiary_color: "#8B0000".to_string(),
                created_at: String::new(),
                updated_at: String::new(),
            },
            prizes,
        }
    }

    #[test]
    fn test_repeats_active_prizes_to_fill_slots() {
        let config = config(vec![
            api_prize(9, "Gorra", true, true),
            api_prize(4, "Camiseta", true, true),
            api_prize(6, "Nada", false, false),
            api_prize(5, "Sigue intentando", true, false),
        ]);
        let wheel = transform_config(&config);

        assert_eq!(wheel.prizes.len(), WHEEL_SLOTS);
        let ids: Vec<&str> = wheel.prizes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["4-0", "5-1", "9-2", "4-3", "5-4", "9-5", "4-6", "5-7"]);
        assert_eq!(wheel.prizes[1].positive, Some(false));
        assert_eq!(wheel.logo, "https://cdn.example.com/logo.png");
    }

    #[test]
    fn test_colors_cycle_through_company_palette() {
        let wheel = transform_config(&config(vec![api_prize(1, "Gorra", true, true)]));
        assert_eq!(wheel.colors, vec!["#CD0303", "#2F4F4F", "#8B0000"]);
        assert_eq!(wheel.prizes[0].color, "#CD0303");
        assert_eq!(wheel.prizes[1].color, "#2F4F4F");
        assert_eq!(wheel.prizes[2].color, "#8B0000");
        assert_eq!(wheel.prizes[3].color, "#CD0303");
    }

    #[test]
    fn test_placeholders_when_nothing_is_active() {
        let wheel = transform_config(&config(vec![api_prize(1, "Gorra", false, true)]));
        assert_eq!(wheel.prizes.len(), WHEEL_SLOTS);
        assert!(wheel.prizes.iter().all(|p| p.text == DEFAULT_PRIZE_TEXT));
        assert_eq!(wheel.prizes[7].id, "default-7");
        assert_eq!(find_prize_index_by_id(&wheel.prizes, 1), None);
    }

    #[test]
    fn test_find_prize_index_uses_first_matching_slot() {
        let wheel = transform_config(&config(vec![
            api_prize(12, "Gorra", true, true),
            api_prize(30, "Camiseta", true, true),
        ]));
        assert_eq!(find_prize_index_by_id(&wheel.prizes, 12), Some(0));
        assert_eq!(find_prize_index_by_id(&wheel.prizes, 30), Some(1));
        assert_eq!(find_prize_index_by_id(&wheel.prizes, 3), None);
    }

    #[test]
    fn test_find_prize_index_on_plain_ids() {
        let prizes = vec![Prize::new("1", "$100", "#FF6B6B"), Prize::new("2", "$50", "#4ECDC4")];
        assert_eq!(find_prize_index_by_id(&prizes, 2), Some(1));
    }
}
