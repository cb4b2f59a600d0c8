// Marketing copy for the landing page. Presentation only; nothing here is read
// by the audit logic.

pub struct Hero {
    pub headline_blue: &'static str,
    pub headline_rest: &'static str,
    pub lines: &'static [&'static str],
    pub insight_intro: &'static str,
    pub insight_main: &'static str,
    pub cta: &'static str,
    pub cta_subtext: &'static str,
}

pub const HERO: Hero = Hero {
    headline_blue: "Fast Operations Win",
    headline_rest: "The delays you think are normal are the ones costing you the most.",
    lines: &[
        "Every slow response is lost business to a faster competitor.",
        "Every manual task drains hours your team doesn't have.",
        "Every delay kills trust you'll never rebuild.",
    ],
    insight_intro: "This isn't a people problem.",
    insight_main: "It's a systems problem. And systems are what make your operations work, react, and solve problems faster than anyone else.",
    cta: "Find My Revenue Leaks",
    cta_subtext: "See the real cost of what's invisible right now: quotes sitting in inboxes, customers waiting for responses, hours burned chasing what should be automatic",
};

pub struct TrustPoint {
    pub label: &'static str,
    pub value: &'static str,
}

pub const TRUST_POINTS: &[TrustPoint] = &[
    TrustPoint { label: "Built For Scale", value: "15+ Years Building Fortune 500 Systems" },
    TrustPoint { label: "Proven Results", value: "Operations Scaled 6x Without Headcount" },
];

pub const PAIN_HEADLINE: &str = "These Are The Delays:";

/// (text, severe)
pub const PAIN_CARDS: &[(&str, bool)] = &[
    ("Buried in Email Chaos", true),
    ("RFQs Sitting Unnoticed", false),
    ("Slow To Respond to Leads", true),
    ("Forgetting To Reply To Customers", false),
    ("Customers Chasing You for Answers", true),
    ("Mountains of Admin", false),
    ("Switching Between 6 Different Systems", true),
    ("Tasks Piling Up with No Visibility", false),
    ("No Single Source of Truth", true),
];

pub struct Delay {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub duration: &'static str,
    pub percentage: u32,
    pub examples: &'static [&'static str],
}

pub const FRICTION_HEADLINE: &str = "This Is Operational Friction.";
pub const FRICTION_SUBHEAD: &str = "It's the delay between something changing and your team reacting. Made of two hidden delays you've always thought were normal.";
pub const FRICTION_DELAYS: [Delay; 2] = [
    Delay {
        title: "DELAY #1: TIME TO NOTICE SOMETHING NEEDS DOING",
        subtitle: "The delay no one measures. The biggest hidden drain.",
        duration: "4h 23m",
        percentage: 40,
        examples: &[
            "Emails Sitting Unseen",
            "Customer Waiting For Answers",
            "Tasks Lost in Busy Inboxes",
            "Critical Work Hidden in Noise",
        ],
    },
    Delay {
        title: "DELAY #2: TIME TO ACTUALLY DO THE WORK",
        subtitle: "The delay everyone feels. But assumes is unavoidable.",
        duration: "18h 45m",
        percentage: 85,
        examples: &[
            "Manual Admin To Build Quotes, Reports & Updates",
            "Copy-Pasting Between Systems",
            "Rewriting the Same Emails Again",
            "Switching Between 6 to 10 Tools To Finish One Task",
        ],
    },
];
pub const FRICTION_CLOSING: &str = "These two delays stack. And that stack is operational friction. It silently kills your speed, drains your team, and loses the revenue you should already have. Fixing it is the biggest opportunity in your business.";

pub struct HowStep {
    pub phase: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub example: &'static str,
}

pub const HOW_IT_WORKS_HEADLINE: &str = "Work Like People. Scale Like Software.";
pub const HOW_IT_WORKS: &[HowStep] = &[
    HowStep {
        phase: "Input",
        title: "Watches Everything",
        desc: "Every lead, enquiry, RFQ, update, and data change is captured instantly. The moment something changes in your systems, it sees it. Nothing missed.",
        example: "Signal Captured",
    },
    HowStep {
        phase: "Intelligence",
        title: "Understands What Matters",
        desc: "The system reads messages, analyzes data changes, identifies what matters, and decides the next step. Smart logic applied instantly.",
        example: "Priority Detected",
    },
    HowStep {
        phase: "Execution",
        title: "Takes Action Instantly",
        desc: "Replies sent. Quotes drafted. Updates pushed. Alerts triggered. All automatically the moment something needs doing.",
        example: "Action Triggered",
    },
    HowStep {
        phase: "Visibility",
        title: "Surfaces Insights",
        desc: "Data changes highlighted instantly. Delays and bottlenecks surfaced before they become problems. You always know what is happening.",
        example: "Alert Sent",
    },
    HowStep {
        phase: "Scale",
        title: "Scales Infinitely",
        desc: "Handle 10x the volume without hiring more people. Your team gains breathing room. Growth without the growing pains.",
        example: "No Limits",
    },
];

pub struct ImpactMetric {
    pub label: &'static str,
    pub was: &'static str,
    pub now: &'static str,
    pub change: &'static str,
    /// Sparkline stroke, `(r, g, b)`.
    pub color: (u8, u8, u8),
    pub trend: &'static [f64],
}

pub const IMPACT_METRICS: &[ImpactMetric] = &[
    ImpactMetric {
        label: "Admin Load",
        was: "20h / week",
        now: "0h",
        change: "-100%",
        color: (16, 185, 129),
        trend: &[100.0, 90.0, 80.0, 60.0, 40.0, 20.0, 10.0, 5.0, 0.0],
    },
    ImpactMetric {
        label: "Win Rate",
        was: "18% Avg",
        now: "42%",
        change: "+2.3x",
        color: (38, 118, 255),
        trend: &[18.0, 20.0, 22.0, 28.0, 32.0, 35.0, 38.0, 40.0, 42.0],
    },
    ImpactMetric {
        label: "Customer Sat",
        was: "3.2 Stars",
        now: "4.9",
        change: "+53%",
        color: (139, 92, 246),
        trend: &[3.2, 3.4, 3.8, 4.0, 4.3, 4.6, 4.8, 4.9],
    },
    ImpactMetric {
        label: "Lifetime Value",
        was: "1.0x",
        now: "2.4x",
        change: "+140%",
        color: (234, 179, 8),
        trend: &[1.0, 1.2, 1.3, 1.6, 1.8, 2.0, 2.2, 2.4],
    },
];

pub struct Outcome {
    pub title: &'static str,
    pub desc: &'static str,
    pub stat: &'static str,
}

pub const OUTCOMES: &[Outcome] = &[
    Outcome {
        title: "Your Data Watched Constantly",
        desc: "The moment things change, the system acts. Alerts sent instantly. Reports generated automatically. Problems surfaced before they become fires.",
        stat: "Real-Time Intelligence",
    },
    Outcome {
        title: "Scale Without Headcount",
        desc: "Handle 2x, 5x, or 10x the volume without hiring more people or adding stress. Growth without growing pains.",
        stat: "Infinite Scale",
    },
    Outcome {
        title: "Team Focused On Growth",
        desc: "Admin handled by systems. Your people spend time on strategy, sales, and improvement. Not firefighting.",
        stat: "Zero Admin Chaos",
    },
    Outcome {
        title: "Quotes Made For You",
        desc: "RFQs analyzed, quotes drafted, customers responded to. All automatically while you focus on winning deals.",
        stat: "Admin Done Automatically",
    },
    Outcome {
        title: "Emails Read & Responded To",
        desc: "Every customer message acknowledged instantly. Updates sent proactively. No chasing required.",
        stat: "24/7 Response System",
    },
    Outcome {
        title: "Insights Delivered Automatically",
        desc: "See what is working, what is stuck, and what to fix next. No manual analysis. No waiting for reports.",
        stat: "Always Up To Date",
    },
];

pub struct Industry {
    pub label: &'static str,
    pub desc: &'static str,
    pub outcome: &'static str,
}

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        label: "Distributors & Wholesalers",
        desc: "High enquiry & RFQ volume. Fast responses win deals. Slow responses lose them.",
        outcome: "Become the supplier customers love. Because you always capture the lead, reply first, and get quotes out in minutes.",
    },
    Industry {
        label: "Manufacturers & Industrial",
        desc: "Production delays + manual updates slow everything down. Customers chase. Everything backs up.",
        outcome: "Customers always know what's happening. With automatic updates, instant RFQ acknowledgements, and quote-ready drafts.",
    },
    Industry {
        label: "Service Businesses",
        desc: "Inbound leads need instant replies. Speed wins. Slow responses lose deals to faster competitors.",
        outcome: "Every lead captured. Every enquiry answered instantly. Speed optimised so you always reply first and win more business.",
    },
    Industry {
        label: "Teams That Send Quotes",
        desc: "If quoting speed matters in your business, Thraiv will transform you.",
        outcome: "RFQs get instant acknowledgement. Quote-ready drafts in minutes. You win more deals without hiring more people.",
    },
];

/// (question, answer paragraphs)
pub const FAQ_ITEMS: &[(&str, &[&str])] = &[
    (
        "Will this work for my business?",
        &[
            "If you want to remove delays, automate repetitive work, and stay ahead of what is now possible with AI systems, it will work.",
            "We help teams speed up quotes, reduce manual admin, prevent missed updates, and bring clarity to information that is currently scattered.",
            "If you want to move faster and build a smarter business, you are in the right place.",
        ],
    ),
    (
        "How long does implementation take?",
        &[
            "If you want a specific problem solved, we can have something live in two to four weeks.",
            "If you want a full AI enabled operating system, we will map everything with you and build it out step by step. Bigger transformations usually take a few months depending on scope.",
            "Either way, you see improvements quickly while we build the larger system behind it.",
        ],
    ),
    (
        "What if it does not work for us?",
        &[
            "We only build systems that solve real problems.",
            "That is why everything starts with an opportunity audit. We walk through your operations, show you where the biggest gains are, and highlight opportunities you may be missing.",
            "If there is no meaningful value to create, we do not work together. You get clarity before any commitment.",
        ],
    ),
    (
        "How much does this cost?",
        &[
            "It depends on the size of your team and the level of automation or transformation you want.",
            "The audit will show you what you could improve, what it is currently costing you, and what the ROI looks like. From there you choose the level of investment that makes sense.",
        ],
    ),
];

pub const URGENCY_HEADLINE: &str = "The Opportunity Is Now";
pub const URGENCY_SUBHEAD: &str = "Speed isn't magic. It's systems. And systems can be installed starting today. The businesses winning right now aren't special. They just moved first.";
pub const URGENCY_POINTS: &[&str] = &[
    "Fast response times win more deals. Be the one who responds first.",
    "Your team can handle 10x the volume without burning out.",
    "Every workflow you automate creates compound returns across your business.",
];

pub const AUDIT_POINTS: &[&str] = &[
    "Diagnose exactly where you're leaking revenue",
    "Map your hidden bottlenecks killing win rate",
    "Get your custom roadmap to 10x faster operations",
];

pub const FINAL_CTA_HEADLINE: &str = "Find Out How Much Slow Operations Cost You Last Month.";
pub const FINAL_CTA_SUBHEAD: &str = "In 15 minutes, we'll show you exactly where you're bleeding money, the bottlenecks killing your win rate, and your custom roadmap to 10x faster operations.";
pub const FINAL_CTA_GUARANTEE: &str = "Zero pressure. Zero cost. Just insights you can use immediately, even if you never work with us.";

/// Strings used by the audit wizard's screens.
pub mod audit {
    pub const INTRO_HEADLINE: &str = "Get Your Free Revenue Leak Report";
    pub const INTRO_PARAGRAPH: &str = "Every industrial business loses money to slow quoting, delayed replies and buried workloads. This audit shows where your biggest leaks are, what they're costing, and the fastest wins available.";
    pub const INTRO_REASSURANCE: &str = "Under 90 seconds. No jargon.";
    pub const TRUST_LINE: &str = "Trusted by UK industrial operations teams handling 500+ enquiries monthly";
    pub const RESUME_NOTICE: &str = "Welcome back! We saved your answers so you can pick up where you left off.";
    pub const SUBMIT_BUTTON: &str = "Generate My Report";
    pub const SUBMIT_REASSURANCE: &str = "Your personalised breakdown will arrive in your inbox shortly";
    pub const CONFIRMATION_HEADLINE: &str = "Your Revenue Leak Report Is Being Built";
    pub const BUILDING_MESSAGE: &str = "Analysing your inputs and calculating revenue recovery opportunities...";
    pub const LEAD_FORM_HEADLINE: &str = "Want To Discuss Your Results Right Away?";
    pub const LEAD_FORM_SUBHEADLINE: &str = "Book a call to go through your report together";
    pub const LEAD_FORM_BUTTON: &str = "Send & Book Call";
    pub const NEXT_STEPS_HEADLINE: &str = "What Happens Next";
    /// (title, detail)
    pub const NEXT_STEPS: &[(&str, &str)] = &[
        ("Your report arrives in 5 minutes", "Check your inbox and spam folder"),
        ("We review it and contact you shortly", "Our team analyses your specific situation"),
        ("We show you exactly how to fix what we found", "Clear roadmap to recover lost revenue"),
    ];
    pub const CONFIRMATION_TRUST_LINE: &str = "Based on real industrial benchmarks and the answers you provided";
}
