//! Card text.

pub struct ProposalCopy {
    pub emoji: &'static str,
    pub heading: &'static str,
    pub question: &'static str,
    pub subtext: &'static str,
    pub accept_label: &'static str,
    pub decline_label: &'static str,
    pub hint: &'static str,
}

pub const PROPOSAL: ProposalCopy = ProposalCopy {
    emoji: "💝",
    heading: "Will you be",
    question: "my Valentine?",
    subtext: "to my beautiful bibo... Just say yes, please? 🥺",
    accept_label: "Yes! 💖",
    decline_label: "No 😢",
    hint: "(Hint: The \"No\" button is shy! 😊)",
};

/// Poem lines; empty strings separate stanzas.
pub const POEM: &[&str] = &[
    "My desire for beauty grows with each day,",
    "My dearest love, you take my breath away.",
    "Your eyes like emeralds, sparkling so bright,",
    "And your lips so tender, soft, and just right.",
    "",
    "Your beauty knows no limits, no bounds,",
    "No wonder my heart leaps and resounds.",
    "With every hour, my love for you grows,",
    "A love that endures through sun and through rainbows. 💛",
    "",
    "Thank you, my love, for being my Valentine,",
    "Forever and always, I am yours and you are mine.",
];

pub const MOON_ALT: &str = "Full Moon";
