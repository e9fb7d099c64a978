//! Static marketing copy rendered by the landing page sections.

pub const PRODUCT_NAME: &str = "ADmyBRAND AI Suite";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// In-page anchor, e.g. `#pricing`.
    pub href: &'static str,
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Features", href: "#features" },
    NavItem { label: "Pricing", href: "#pricing" },
    NavItem { label: "Testimonials", href: "#testimonials" },
    NavItem { label: "FAQ", href: "#faq" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static HERO_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: "🧠",
        title: "AI Content Generator",
        description: "Create compelling copy in seconds",
    },
    Highlight {
        icon: "📊",
        title: "Smart Analytics",
        description: "AI-powered insights and recommendations",
    },
    Highlight {
        icon: "⚡",
        title: "Automated Campaigns",
        description: "Set it and forget it marketing",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: [Stat; 2] = [
    Stat { value: "10M+", label: "Campaigns Created" },
    Stat { value: "98%", label: "Satisfaction Rate" },
];

pub static FEATURES: [Highlight; 6] = [
    Highlight {
        icon: "🧠",
        title: "AI Content Generation",
        description: "Create compelling marketing copy, social media posts, and email campaigns with our advanced AI engine.",
    },
    Highlight {
        icon: "🎯",
        title: "Smart Audience Targeting",
        description: "Identify and reach your ideal customers with precision using AI-powered audience analysis.",
    },
    Highlight {
        icon: "⚡",
        title: "Automated Campaigns",
        description: "Set up and run marketing campaigns that optimize themselves in real-time for maximum ROI.",
    },
    Highlight {
        icon: "📊",
        title: "Advanced Analytics",
        description: "Get deep insights into campaign performance with AI-driven analytics and predictive modeling.",
    },
    Highlight {
        icon: "👥",
        title: "Customer Journey Mapping",
        description: "Visualize and optimize every touchpoint in your customer's journey with AI assistance.",
    },
    Highlight {
        icon: "🚀",
        title: "Performance Optimization",
        description: "Continuously improve your marketing performance with AI recommendations and auto-adjustments.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub content: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    /// Star rating out of five.
    pub rating: u8,
    pub avatar: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        content: "ADmyBRAND AI Suite completely transformed our marketing approach. We've seen a 300% increase in engagement and our content creation time has been cut by 80%. The AI-generated campaigns perform better than anything we created manually.",
        author: "Sarah Chen",
        role: "CMO",
        company: "TechFlow Solutions",
        rating: 5,
        avatar: "SC",
    },
    Testimonial {
        content: "The automation features are incredible. Our team can now focus on strategy while the AI handles the execution. We've launched 50+ campaigns this quarter with remarkable consistency and quality. ROI increased by 250%.",
        author: "Marcus Rodriguez",
        role: "Marketing Director",
        company: "Growth Dynamics",
        rating: 5,
        avatar: "MR",
    },
    Testimonial {
        content: "As a small business owner, I never thought we could compete with larger companies. ADmyBRAND AI Suite leveled the playing field. Our social media presence exploded and we're generating leads we never imagined possible.",
        author: "Emily Watson",
        role: "Founder",
        company: "Local Craft Co.",
        rating: 5,
        avatar: "EW",
    },
    Testimonial {
        content: "The AI insights are game-changing. It predicted market trends that our analysts missed and helped us pivot our campaigns before our competitors. The predictive analytics feature alone paid for the entire subscription.",
        author: "James Liu",
        role: "VP of Marketing",
        company: "InnovateCorp",
        rating: 5,
        avatar: "JL",
    },
    Testimonial {
        content: "Customer journey mapping with AI has revolutionized how we understand our audience. We can now personalize experiences at scale and our customer lifetime value has increased by 180%. Best investment we've made.",
        author: "Anna Kowalski",
        role: "Head of Digital",
        company: "RetailMax",
        rating: 5,
        avatar: "AK",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: [Faq; 8] = [
    Faq {
        question: "What makes ADmyBRAND AI Suite different from other marketing tools?",
        answer: "ADmyBRAND AI Suite combines advanced artificial intelligence with intuitive design to provide a comprehensive marketing solution. Unlike traditional tools that focus on single functions, our suite offers end-to-end campaign management, from content creation to performance optimization, all powered by cutting-edge AI that learns and adapts to your brand's unique voice and audience preferences.",
    },
    Faq {
        question: "How quickly can I see results with ADmyBRAND AI Suite?",
        answer: "Most users see significant improvements within the first 30 days. Our AI begins optimizing your campaigns immediately, and you'll notice better engagement rates, higher click-through rates, and improved conversion metrics typically within 2-3 weeks. However, the AI continues to learn and improve over time, with peak performance usually achieved within 60-90 days of consistent use.",
    },
    Faq {
        question: "Do I need technical skills to use the platform?",
        answer: "Not at all! ADmyBRAND AI Suite is designed for marketers, not engineers. Our intuitive interface guides you through every step, and our AI handles the complex technical aspects automatically. We also provide comprehensive onboarding, tutorials, and 24/7 support to ensure you're successful from day one. If you can use email or social media, you can master our platform.",
    },
    Faq {
        question: "How does the AI content generation work?",
        answer: "Our AI analyzes your brand voice, target audience, industry trends, and campaign goals to generate highly relevant content. It uses advanced natural language processing and machine learning models trained on millions of successful campaigns. The AI creates everything from social media posts and email copy to blog articles and ad headlines, all while maintaining your brand's unique tone and style.",
    },
    Faq {
        question: "Can I integrate ADmyBRAND with my existing marketing tools?",
        answer: "Absolutely! We offer extensive integrations with popular platforms including HubSpot, Salesforce, Mailchimp, Google Analytics, Facebook Ads, LinkedIn, and many more. Our API also allows for custom integrations with your existing tech stack. Our team can help you set up integrations during onboarding to ensure seamless workflow continuity.",
    },
    Faq {
        question: "What kind of support do you provide?",
        answer: "We offer comprehensive support across all plans. Starter users get email support with 24-hour response times. Professional users receive priority support with 4-hour response times plus live chat. Enterprise customers get dedicated account managers, phone support, and guaranteed SLAs. We also provide extensive documentation, video tutorials, and regular webinars.",
    },
    Faq {
        question: "Is my data secure with ADmyBRAND AI Suite?",
        answer: "Security is our top priority. We use enterprise-grade encryption (AES-256) for data at rest and in transit, maintain SOC 2 Type II compliance, and follow GDPR and CCPA regulations. Your data is stored in secure, redundant data centers with 99.9% uptime guarantees. We never share your data with third parties and you maintain full ownership of all your content and insights.",
    },
    Faq {
        question: "Can I cancel my subscription at any time?",
        answer: "Yes, you can cancel your subscription at any time with no penalties or hidden fees. Your service will continue until the end of your current billing period, and you'll retain access to your data for 90 days after cancellation for export purposes. We also offer a 30-day money-back guarantee if you're not completely satisfied with the platform.",
    },
];
