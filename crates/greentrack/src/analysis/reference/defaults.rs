use super::super::domain::{ActionCategory, BusinessCategory};
use super::super::report::views::{IncentiveCategory, IncentiveEntry, Recommendation};

/// Built-in recommendation. An empty `applies_to` means every category.
/// Every title here must exist in the ROI catalog under the same domain.
pub(crate) struct StaticRecommendation {
    pub category: ActionCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub savings: &'static str,
    pub impact: &'static str,
    pub applies_to: &'static [BusinessCategory],
}

impl StaticRecommendation {
    fn applies(&self, category: BusinessCategory) -> bool {
        self.applies_to.is_empty() || self.applies_to.contains(&category)
    }

    fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            category: self.category,
            title: self.title.to_string(),
            description: self.description.to_string(),
            savings: self.savings.to_string(),
            impact: self.impact.to_string(),
        }
    }
}

pub(crate) const STATIC_RECOMMENDATIONS: &[StaticRecommendation] = &[
    StaticRecommendation {
        category: ActionCategory::Energy,
        title: "Switch to LED Lighting",
        description: "Replace all incandescent and fluorescent bulbs with LED lights. LEDs use 75% less energy and last 25 times longer.",
        savings: "₹2,000-5,000/month",
        impact: "50-100 kg CO2/month",
        applies_to: &[],
    },
    StaticRecommendation {
        category: ActionCategory::Energy,
        title: "Optimize HVAC System",
        description: "Regular maintenance, programmable thermostats, and proper insulation can reduce energy consumption by 20-30%.",
        savings: "₹3,000-8,000/month",
        impact: "100-200 kg CO2/month",
        applies_to: &[],
    },
    StaticRecommendation {
        category: ActionCategory::Energy,
        title: "Upgrade to Energy-Efficient Kitchen Equipment",
        description: "Star-rated refrigerators, induction cooktops and efficient exhaust hoods cut the largest loads in a commercial kitchen.",
        savings: "₹4,000-8,000/month",
        impact: "120-250 kg CO2/month",
        applies_to: &[BusinessCategory::Restaurant],
    },
    StaticRecommendation {
        category: ActionCategory::Energy,
        title: "Install Smart Power Strips and Timers",
        description: "Switch off computers, displays and signage automatically outside business hours to remove standby consumption.",
        savings: "₹800-1,500/month",
        impact: "20-40 kg CO2/month",
        applies_to: &[BusinessCategory::Office, BusinessCategory::RetailShop],
    },
    StaticRecommendation {
        category: ActionCategory::Energy,
        title: "Install Variable Frequency Drives",
        description: "Drives match motor, pump and compressor speed to demand instead of running at full load all day.",
        savings: "₹6,000-12,000/month",
        impact: "200-400 kg CO2/month",
        applies_to: &[BusinessCategory::SmallFactory, BusinessCategory::Warehouse],
    },
    StaticRecommendation {
        category: ActionCategory::Energy,
        title: "Adopt Solar Water Pumping",
        description: "Solar pumps replace diesel or grid irrigation pumps and run at no fuel cost during daylight hours.",
        savings: "₹5,000-9,000/month",
        impact: "150-300 kg CO2/month",
        applies_to: &[BusinessCategory::SmallFarm],
    },
    StaticRecommendation {
        category: ActionCategory::Waste,
        title: "Implement Waste Segregation",
        description: "Separate recyclable materials to reduce landfill waste and potentially earn from recycling programs.",
        savings: "₹500-1,500/month",
        impact: "30-50 kg CO2/month",
        applies_to: &[],
    },
    StaticRecommendation {
        category: ActionCategory::Waste,
        title: "Start On-Site Composting",
        description: "Compost food scraps and organic residue to avoid landfill methane and produce usable soil amendment.",
        savings: "₹1,000-2,000/month",
        impact: "40-80 kg CO2/month",
        applies_to: &[BusinessCategory::Restaurant, BusinessCategory::SmallFarm],
    },
    StaticRecommendation {
        category: ActionCategory::Waste,
        title: "Switch to Reusable Packaging",
        description: "Returnable crates, totes and refill stations replace single-use packaging for deliveries and customers.",
        savings: "₹1,500-3,500/month",
        impact: "30-60 kg CO2/month",
        applies_to: &[BusinessCategory::RetailShop, BusinessCategory::Warehouse],
    },
    StaticRecommendation {
        category: ActionCategory::Waste,
        title: "Reduce Paper Usage with Digital Workflows",
        description: "Move invoices, approvals and forms to digital tools and default printers to duplex.",
        savings: "₹800-1,500/month",
        impact: "15-30 kg CO2/month",
        applies_to: &[BusinessCategory::Office],
    },
    StaticRecommendation {
        category: ActionCategory::Waste,
        title: "Recover and Resell Production Scrap",
        description: "Sort metal, plastic and offcut scrap at the line and sell it to registered recyclers.",
        savings: "₹2,000-4,000/month",
        impact: "60-120 kg CO2/month",
        applies_to: &[BusinessCategory::SmallFactory],
    },
];

/// General recommendations plus those specific to `category`, in table order.
pub(crate) fn recommendations_for(
    category: BusinessCategory,
    domain: ActionCategory,
) -> Vec<Recommendation> {
    STATIC_RECOMMENDATIONS
        .iter()
        .filter(|item| item.category == domain && item.applies(category))
        .map(StaticRecommendation::to_recommendation)
        .collect()
}

struct StaticIncentive {
    title: &'static str,
    description: &'static str,
    eligibility: &'static str,
    value: &'static str,
    category: IncentiveCategory,
    applies_to: &'static [BusinessCategory],
}

const STATIC_INCENTIVES: &[StaticIncentive] = &[
    StaticIncentive {
        title: "Rooftop Solar Capital Subsidy",
        description: "State and central programmes part-fund grid-connected rooftop solar for commercial premises.",
        eligibility: "Businesses owning or holding a long lease on the roof space, with a net-metering capable connection.",
        value: "Typically 20-40% of installed system cost",
        category: IncentiveCategory::Solar,
        applies_to: &[],
    },
    StaticIncentive {
        title: "Energy Efficiency Financing for Small Enterprises",
        description: "Concessional loans for replacing lighting, motors, pumps and HVAC with efficient equipment.",
        eligibility: "Registered micro, small and medium enterprises with an energy audit or vendor quotation.",
        value: "Reduced interest rate and collateral-free loans",
        category: IncentiveCategory::Energy,
        applies_to: &[],
    },
    StaticIncentive {
        title: "Accelerated Depreciation on Energy-Saving Assets",
        description: "Qualifying renewable and energy-saving equipment can be depreciated faster than standard plant.",
        eligibility: "Businesses filing income tax on a profit basis that purchase qualifying equipment.",
        value: "Higher first-year depreciation claim",
        category: IncentiveCategory::Tax,
        applies_to: &[],
    },
    StaticIncentive {
        title: "Recycler Buy-Back Credits",
        description: "Authorised recyclers and municipal programmes pay for segregated dry waste and scrap.",
        eligibility: "Businesses that segregate recyclables at source and use an authorised collector.",
        value: "Per-kg payment for segregated recyclables",
        category: IncentiveCategory::Waste,
        applies_to: &[],
    },
    StaticIncentive {
        title: "Solar Pump Subsidy for Farms",
        description: "Support for replacing diesel irrigation pumps with standalone or grid-connected solar pumps.",
        eligibility: "Farmers and farm businesses with irrigation pumps on owned or leased land.",
        value: "Up to 60% of pump cost shared by government",
        category: IncentiveCategory::Solar,
        applies_to: &[BusinessCategory::SmallFarm],
    },
];

pub(crate) fn incentives_for(category: BusinessCategory) -> Vec<IncentiveEntry> {
    STATIC_INCENTIVES
        .iter()
        .filter(|item| item.applies_to.is_empty() || item.applies_to.contains(&category))
        .map(|item| IncentiveEntry {
            title: item.title.to_string(),
            description: item.description.to_string(),
            eligibility: item.eligibility.to_string(),
            value: item.value.to_string(),
            category: item.category,
            application_url: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_gets_both_domains() {
        for category in BusinessCategory::ordered() {
            for domain in ActionCategory::ordered() {
                assert!(
                    !recommendations_for(category, domain).is_empty(),
                    "{} has no {} defaults",
                    category,
                    domain.key()
                );
            }
        }
    }

    #[test]
    fn titles_are_unique_within_each_domain() {
        for category in BusinessCategory::ordered() {
            for domain in ActionCategory::ordered() {
                let recommendations = recommendations_for(category, domain);
                let titles: HashSet<_> = recommendations.iter().map(|r| r.title.as_str()).collect();
                assert_eq!(titles.len(), recommendations.len());
            }
        }
    }

    #[test]
    fn restaurant_gets_kitchen_upgrade() {
        let energy = recommendations_for(BusinessCategory::Restaurant, ActionCategory::Energy);
        let titles: Vec<_> = energy.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Switch to LED Lighting",
                "Optimize HVAC System",
                "Upgrade to Energy-Efficient Kitchen Equipment"
            ]
        );
    }

    #[test]
    fn farm_specific_incentive_is_filtered() {
        assert!(incentives_for(BusinessCategory::SmallFarm)
            .iter()
            .any(|incentive| incentive.title == "Solar Pump Subsidy for Farms"));
        assert!(!incentives_for(BusinessCategory::Office)
            .iter()
            .any(|incentive| incentive.title == "Solar Pump Subsidy for Farms"));
    }
}
