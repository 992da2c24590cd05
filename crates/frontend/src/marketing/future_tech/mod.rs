//! Концепт-страница PROJECT: EVERNODE-SYNC (статичный контент)

use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;

struct PillarCard {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
    points: [&'static str; 3],
}

const PILLARS: [PillarCard; 3] = [
    PillarCard {
        icon: "lock",
        title: "Smart Contracts",
        body: "Digital \"vending machines\" for business agreements. Self-executing, trustless, and immutable logic that ensures the rules of the agreement are fixed and transparent.",
        points: ["Automation", "Trustless Escrow", "Transparent Ledger"],
    },
    PillarCard {
        icon: "cpu",
        title: "Evernode Hosting",
        body: "A decentralized hosting platform built as a sidechain to the XRP Ledger (XRPL). Providing the computing power for complex smart contracts in a low-cost, scalable environment.",
        points: ["XRPL Efficiency", "Global Scalability", "100% Decentralized"],
    },
    PillarCard {
        icon: "users",
        title: "P2P Economy",
        body: "The future of Web3 for independent professionals. Disintermediation cuts out high-fee middlemen, allowing individuals to own their data and portable reputation.",
        points: ["Data Ownership", "No Middlemen", "Portable Reputation"],
    },
];

/// Шаг сценария; `tone` задаёт цвет левой границы
struct ScenarioStep {
    title: &'static str,
    body: &'static str,
    tone: &'static str,
}

const SCENARIO: [ScenarioStep; 3] = [
    ScenarioStep {
        title: "1. The Agreement",
        body: "Anna and her client agree on £950 for a kitchen rewire. This is locked into a Smart Contract. Funds are secure in digital escrow before a single wire is pulled.",
        tone: "accent",
    },
    ScenarioStep {
        title: "2. Verification",
        body: "IoT sensors in the van and Vision Link glasses verify arrival and material usage. Evidence (photos/certificates) is immutably tied to the transaction.",
        tone: "success",
    },
    ScenarioStep {
        title: "3. Instant Settlement",
        body: "Upon digital sign-off, the contract releases funds immediately. No invoicing, no waiting 30 days, no chasing payments. Settlement happens in seconds.",
        tone: "info",
    },
];

const BENEFITS: [(&str, &str); 4] = [
    ("Guaranteed Payments", "Escrow eliminates bad debts"),
    ("Drastically Lower Fees", "P2P removes the 20% platform cut"),
    ("Automated Admin", "No manual invoicing or chasing"),
    ("Portable Asset", "You own your reviews and history"),
];

const CHALLENGES: [(&str, &str); 3] = [
    ("gavel", "Legal Frameworks"),
    ("activity", "Mass Adoption"),
    ("shield", "UX Simplification"),
];

#[component]
#[allow(non_snake_case)]
pub fn FutureTechPage() -> impl IntoView {
    view! {
        <PageFrame page_id="future_tech--custom" category=PAGE_CAT_CUSTOM class="future">
            <section class="future__hero">
                <div class="future__tag">{icon_sized("rocket", 12)}" PROJECT: EVERNODE-SYNC"</div>
                <h2 class="future__title">
                    "THE DECENTRALIZED " <br /> <span class="text-accent">"FUTURE"</span>
                </h2>
                <p class="future__lead">
                    "Craik Electrical is bridging the gap between emerging technology and practical, real-world applications. We're building a peer-to-peer professional economy powered by Smart Contracts and the XRPL network."
                </p>
                <div class="future__hero-actions">
                    <button class="btn btn--light">"READ WHITEPAPER"</button>
                    <button class="btn btn--secondary">"VIEW ROADMAP"</button>
                </div>
            </section>

            <div class="future__pillars">
                {PILLARS
                    .iter()
                    .map(|card| view! {
                        <div class="pillar-card">
                            <div class="pillar-card__icon">{icon_sized(card.icon, 28)}</div>
                            <h3 class="pillar-card__title">{card.title}</h3>
                            <p class="pillar-card__body">{card.body}</p>
                            <ul class="pillar-card__points">
                                {card.points.iter().map(|point| view! {
                                    <li>{icon_sized("shield-check", 14)}" "{*point}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>

            <section class="future__scenario">
                <h3 class="future__section-title">
                    {icon_sized("hard-hat", 24)}
                    " PRACTICAL APPLICATION: \"ANNA'S SMART JOB\""
                </h3>
                <div class="future__scenario-grid">
                    <div class="future__steps">
                        {SCENARIO.iter().map(|step| view! {
                            <div class=format!("scenario-step scenario-step--{}", step.tone)>
                                <p class="scenario-step__title">{step.title}</p>
                                <p class="scenario-step__body">{step.body}</p>
                            </div>
                        }).collect_view()}
                    </div>

                    <div class="benefits">
                        <h4 class="benefits__title">"SUMMARY OF BENEFITS"</h4>
                        {BENEFITS.iter().map(|(label, desc)| view! {
                            <div class="benefits__row">
                                <div>
                                    <p class="benefits__label">{*label}</p>
                                    <p class="benefits__desc">{*desc}</p>
                                </div>
                                {icon("check-circle")}
                            </div>
                        }).collect_view()}
                        <div class="benefits__soon">
                            <span>"Coming Soon: Q4 2025"</span>
                            {icon_sized("arrow-right", 16)}
                        </div>
                    </div>
                </div>
            </section>

            <section class="future__challenges">
                <h4>"ROADMAP CHALLENGES"</h4>
                <div class="future__challenge-list">
                    {CHALLENGES.iter().map(|(icon_name, label)| view! {
                        <span>{icon_sized(icon_name, 14)}" "{*label}</span>
                    }).collect_view()}
                </div>
            </section>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::icons::icon_markup;

    #[test]
    fn test_page_icons_exist() {
        let names = PILLARS
            .iter()
            .map(|c| c.icon)
            .chain(CHALLENGES.iter().map(|(name, _)| *name))
            .chain(["rocket", "shield-check", "hard-hat", "check-circle", "arrow-right"]);
        for name in names {
            assert!(icon_markup(name).is_some(), "missing icon {name}");
        }
    }
}
