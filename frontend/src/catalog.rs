use crate::models::content::{
    ActivityRecord, FaqEntry, Feature, FraudTopic, ProgressRecord, Severity, Testimonial,
    ThreatRecord, ThreatVolume, VideoItem,
};

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🛡️",
        title: "Real-time Threat Monitoring",
        description: "Watch suspicious links, calls and messages get flagged before they reach your wallet.",
    },
    Feature {
        icon: "🤖",
        title: "Bot Detection",
        description: "Spot automated scam accounts on social media and messaging apps with simple checks.",
    },
    Feature {
        icon: "💳",
        title: "UPI & Card Safety",
        description: "Learn the patterns behind collect-request scams, fake refunds and skimming.",
    },
    Feature {
        icon: "📊",
        title: "Money Habits Analytics",
        description: "Track spending, savings goals and subscriptions in one calm dashboard.",
    },
    Feature {
        icon: "🎓",
        title: "Bite-sized Lessons",
        description: "Five-minute modules on budgeting, credit scores and investing basics.",
    },
    Feature {
        icon: "🌐",
        title: "Your Language",
        description: "Every lesson available in English, Hindi and Punjabi.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Sharma",
        role: "College student",
        location: "Delhi",
        quote: "I almost paid a fake KYC fee. The scam checklist made me stop and call my bank instead.",
        rating: 5,
    },
    Testimonial {
        name: "Gurpreet Singh",
        role: "Shop owner",
        location: "Ludhiana",
        quote: "The Punjabi lessons finally explained UPI collect requests in a way my parents understand too.",
        rating: 5,
    },
    Testimonial {
        name: "Anil Mehta",
        role: "Retired teacher",
        location: "Jaipur",
        quote: "Short videos, big words explained simply. I now check every link before I tap it.",
        rating: 4,
    },
    Testimonial {
        name: "Sneha Iyer",
        role: "Software engineer",
        location: "Bengaluru",
        quote: "The budgeting module is the first one I actually finished. Recommended it to my whole team.",
        rating: 5,
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Is Sangrakshak free to use?",
        answer: "The lessons and the scam checklist are free. The monitoring dashboard comes with a 14-day free trial.",
    },
    FaqEntry {
        question: "Do you need access to my bank account?",
        answer: "No. We never ask for bank credentials, OTPs or UPI PINs. Anyone who does is a scammer.",
    },
    FaqEntry {
        question: "Which languages are supported?",
        answer: "English, Hindi and Punjabi. You can switch at any time from the language menu.",
    },
    FaqEntry {
        question: "How does threat monitoring work?",
        answer: "The dashboard shows common scam campaigns reported in your region along with steps to stay safe.",
    },
    FaqEntry {
        question: "Can I use it on my phone?",
        answer: "Yes, the whole site works in any modern mobile browser.",
    },
];

pub const VIDEOS: &[VideoItem] = &[
    VideoItem {
        title: "Spotting a phishing SMS",
        description: "Three questions to ask before you tap any link.",
        embed_url: "https://www.youtube.com/embed/R12_y2BhKbE",
        duration: "4:12",
    },
    VideoItem {
        title: "UPI collect-request scams",
        description: "Why you never enter a PIN to receive money.",
        embed_url: "https://www.youtube.com/embed/0aBqpT7vAUE",
        duration: "5:40",
    },
    VideoItem {
        title: "Budgeting in 50/30/20",
        description: "A simple rule for splitting your monthly income.",
        embed_url: "https://www.youtube.com/embed/HQzoZfc3GwQ",
        duration: "6:05",
    },
];

pub const FRAUD_TOPICS: &[FraudTopic] = &[
    FraudTopic {
        title: "Phishing Links",
        description: "Messages that copy your bank or a delivery company and push you to a look-alike website.",
        badge: "Very common",
        tips: &[
            "Check the domain letter by letter before logging in.",
            "Banks never send login links over SMS.",
            "Open the official app instead of the link.",
        ],
    },
    FraudTopic {
        title: "UPI Collect Requests",
        description: "A stranger sends a collect request disguised as a refund or prize.",
        badge: "Rising",
        tips: &[
            "Entering your UPI PIN always sends money, never receives it.",
            "Decline requests you did not expect.",
            "Report the UPI ID inside your payments app.",
        ],
    },
    FraudTopic {
        title: "Fake KYC Updates",
        description: "Callers threaten to block your account unless you share an OTP or install a screen-sharing app.",
        badge: "High risk",
        tips: &[
            "KYC is done at the branch or inside the official app.",
            "Never install remote-access apps on request.",
            "Hang up and call the number printed on your card.",
        ],
    },
    FraudTopic {
        title: "Investment Scams",
        description: "Groups promising guaranteed daily returns on crypto or stock tips.",
        badge: "Costly",
        tips: &[
            "Guaranteed returns do not exist.",
            "Verify advisers on the SEBI register.",
            "Be wary of early small payouts meant to build trust.",
        ],
    },
];

pub const THREATS: &[ThreatRecord] = &[
    ThreatRecord {
        title: "Fake electricity bill SMS",
        description: "Messages claiming power will be cut tonight unless a bill is paid via link.",
        severity: Severity::Critical,
        source: "SMS",
        detected: "2 min ago",
    },
    ThreatRecord {
        title: "Bot network on Instagram",
        description: "Cluster of new accounts promoting a 'double your money' scheme.",
        severity: Severity::High,
        source: "Social",
        detected: "18 min ago",
    },
    ThreatRecord {
        title: "Courier customs call",
        description: "Callers posing as customs officers demanding clearance fees.",
        severity: Severity::Medium,
        source: "Voice",
        detected: "1 hr ago",
    },
    ThreatRecord {
        title: "Look-alike bank domain",
        description: "A recently registered domain imitating a major bank's netbanking page.",
        severity: Severity::Low,
        source: "Web",
        detected: "3 hr ago",
    },
];

pub const ACTIVITY: &[ActivityRecord] = &[
    ActivityRecord {
        title: "Completed lesson",
        detail: "Understanding credit scores",
        time: "Today, 10:24",
    },
    ActivityRecord {
        title: "Blocked link",
        detail: "kyc-update-secure.in",
        time: "Yesterday, 19:02",
    },
    ActivityRecord {
        title: "Quiz passed",
        detail: "UPI safety basics (9/10)",
        time: "Yesterday, 08:15",
    },
];

pub const PROGRESS: &[ProgressRecord] = &[
    ProgressRecord { module: "Scam Awareness", completed: 8, total: 10 },
    ProgressRecord { module: "Budgeting Basics", completed: 3, total: 6 },
    ProgressRecord { module: "Credit & Loans", completed: 1, total: 5 },
    ProgressRecord { module: "Investing 101", completed: 0, total: 7 },
];

pub const WEEKLY_THREATS: &[ThreatVolume] = &[
    ThreatVolume { day: "Mon", blocked: 12 },
    ThreatVolume { day: "Tue", blocked: 19 },
    ThreatVolume { day: "Wed", blocked: 8 },
    ThreatVolume { day: "Thu", blocked: 23 },
    ThreatVolume { day: "Fri", blocked: 15 },
    ThreatVolume { day: "Sat", blocked: 27 },
    ThreatVolume { day: "Sun", blocked: 10 },
];
