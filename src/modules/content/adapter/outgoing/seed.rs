// src/modules/content/adapter/outgoing/seed.rs
//
// Authored portfolio content. Order matters: listings, featured selection
// and tag universes all follow the order written here.

use std::collections::BTreeMap;

use crate::modules::content::application::domain::entities::{
    BlogPost, Duration, Links, Metrics, Milestone, MilestoneType, PersonalInfo, Project,
    ProjectStatus, ProjectType, TechStack,
};
use crate::modules::content::application::domain::ContentSnapshot;

const CASE_STUDY_LINK: &str = "/case-study/saas-analytics";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn span(start: &str, end: &str) -> Duration {
    Duration {
        start: start.to_string(),
        end: Some(end.to_string()),
    }
}

fn stack(frontend: &[&str], backend: &[&str], database: &[&str], tools: &[&str]) -> TechStack {
    TechStack {
        frontend: strings(frontend),
        backend: strings(backend),
        database: strings(database),
        tools: strings(tools),
    }
}

fn counts(users: u64, revenue: u64) -> Option<Metrics> {
    Some(Metrics {
        users: Some(users),
        revenue: Some(revenue),
        growth: None,
    })
}

fn live(url: &str) -> Option<Links> {
    Some(Links {
        live: Some(url.to_string()),
        github: None,
        case_study: Some(CASE_STUDY_LINK.to_string()),
    })
}

pub fn portfolio_snapshot() -> ContentSnapshot {
    ContentSnapshot {
        projects: projects(),
        blog_posts: blog_posts(),
        milestones: milestones(),
        personal_info: personal_info(),
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "Google-Maps-Company-scraper".into(),
            title: "Google Maps Scraper".into(),
            description: "Build a Business scraper to analyse x companies in x regeon. and also usefull for later to have a DB with companies i can contact for my future saas.".into(),
            long_description: String::new(),
            tags: strings(&["Python", "CSV", "Playwright scraper", "IP Rotation", "Paralel speed"]),
            duration: span("2023-12", "2023-12"),
            project_type: ProjectType::FreeTool,
            status: ProjectStatus::Completed,
            arr_milestone: Some("$0".into()),
            lessons: strings(&[
                "Scraping data with IP rotation and efficiency of paralel scripts",
                "Data organizing cleaning and storing for future expantion",
            ]),
            tech_stack: stack(&["NO"], &["Python"], &["CSV"], &["Playwright scraper", "IP rotation", "Paralel scripts"]),
            metrics: counts(1, 0),
            links: live("https://github.com/xgino/Google-Map-Scaper"),
        },
        Project {
            id: "Website-Contact-Email-scraper".into(),
            title: "Website Email Scraper".into(),
            description: "Build a Email scraper base on the Google maps scraper, after we got the business data to scrape emails of those comanies for later to contact with".into(),
            long_description: String::new(),
            tags: strings(&["Python", "CSV", "Bs4 scraper", "Paralel speed"]),
            duration: span("2023-12", "2023-12"),
            project_type: ProjectType::FreeTool,
            status: ProjectStatus::Completed,
            arr_milestone: Some("$0".into()),
            lessons: strings(&[
                "GPDR of EU on email collection. since this is public available data. its the same as doing this manualy. ofc respecting robots.txt and policy first before scraping anything.",
                "Unfortunately no IP rotation, since we are visiting each website 1x so there is not need for a ip rotate, but scraping 100k websites might seem weird to my internet provider. no normal person visits 100k websites a day. and internet is very slow while in use",
                "Every website has a difirent structure and where they put email, in contact, support, or other pages. maybe footer header everywhere is possible. so we need a scipt that is adaptable to any website",
            ]),
            tech_stack: stack(&["NO"], &["Python"], &["CSV"], &["BS4 scraper", "Paralel scripts"]),
            metrics: counts(1, 0),
            links: live("https://github.com/xgino/Email-Web-Scraper"),
        },
        Project {
            id: "Dating-App-Website".into(),
            title: "Dating Web App".into(),
            description: "Build a dating website with ML match algor, to match perfect between users.".into(),
            long_description: String::new(),
            tags: strings(&["Python", "Html", "CSS", "JS", "ML matching alg"]),
            duration: span("2024-01", "2024-03"),
            project_type: ProjectType::Failed,
            status: ProjectStatus::Archived,
            arr_milestone: Some("$0".into()),
            lessons: strings(&[
                "Did some marketing beforhand and see cases that succeeded",
                "Building Frontend website with swipe functions",
                "Didint dive deeper into the marketing aspect wich critical",
                "Luckly i didnt build the match algorithm yet, so not much time has been wasted beside webdev",
            ]),
            tech_stack: stack(&["HTML", "CSS", "JS"], &["Django"], &["PostgreSQL"], &["Web Design", "Backend dev", "Frontend dev"]),
            metrics: counts(0, 0),
            links: live("https://github.com/xgino/Cupid"),
        },
        Project {
            id: "Web-Agency".into(),
            title: "WebResolute Web Agency".into(),
            description: "Since i have exp with Frontend Backend dev, i can do full stack dev so I can freelance with webagency. ".into(),
            long_description: String::new(),
            tags: strings(&["Python", "Html", "CSS", "JS", "Django"]),
            duration: span("2024-04", "2024-09"),
            project_type: ProjectType::Failed,
            status: ProjectStatus::Archived,
            arr_milestone: Some("$0".into()),
            lessons: strings(&[
                "Didnt spend much on marketing, wich is the case of fail",
                "did research on similair angecies but am bad with marketing",
            ]),
            tech_stack: stack(&["HTML", "CSS", "JS"], &["Django"], &["PostgreSQL"], &["Web Design", "Backend dev", "Frontend dev"]),
            metrics: counts(0, 0),
            links: live("https://webresolute.com"),
        },
        Project {
            id: "Data-Agency".into(),
            title: "Bolar Data Agency".into(),
            description: "Since i study CS student, Why not selling some data? since we work somuch with data. so data angency selling data I scrape form the internet.".into(),
            long_description: String::new(),
            tags: strings(&["Python", "Html", "CSS", "JS", "Django"]),
            duration: span("2024-04", "2024-05"),
            project_type: ProjectType::Failed,
            status: ProjectStatus::Archived,
            arr_milestone: Some("$0".into()),
            lessons: strings(&[
                "Didnt spend much on marketing, wich is the case of fail",
                "did research on similair angecies but am bad with marketing",
            ]),
            tech_stack: stack(&["HTML", "CSS", "JS"], &["Django"], &["PostgreSQL"], &["Web Design", "Backend dev", "Frontend dev"]),
            metrics: counts(0, 0),
            links: live("https://bolar.co"),
        },
        Project {
            id: "Sandhook-Emailer".into(),
            title: "Sandhook Cold Email Automation".into(),
            description: "Since I have all the data, I shuold build a email sender that is able to send cold emails to new potential users or clients. also good for my future saas to find users.".into(),
            long_description: String::new(),
            tags: strings(&["Cold Email", "Email sender", "Email Campaigne", "Python", "Django"]),
            duration: span("2024-06", "2024-09"),
            project_type: ProjectType::Ongoing,
            status: ProjectStatus::Archived,
            arr_milestone: Some("$0".into()),
            lessons: strings(&[
                "Build the nice landing page in hope users will signup for a preorder no users",
                "no marketing was done so This is the issue.",
                "Have a version that works on my local machine but since there is no presignups and my MVP is not ready yet i have left this for now as it is",
            ]),
            tech_stack: stack(&["HTML", "CSS", "JS"], &["Django"], &["PostgreSQL"], &["Python"]),
            metrics: counts(5, 0),
            links: live("https://sandhook.com"),
        },
        Project {
            id: "QR-Generator".into(),
            title: "QRDive - QR Tracking SaaS".into(),
            description: "QR code generator & tracking SaaS with Stripe.".into(),
            long_description: "First real SaaS with subscription system. Learned Stripe deeply, handled user data, built full product in ~2 months. Later tried ads, SEO, posting on HN/ProductHunt but failed to scale due to boring niche.".into(),
            tags: strings(&["Django", "QR", "SaaS", "Stripe"]),
            duration: span("2024-07", "2025-05"),
            project_type: ProjectType::Ongoing,
            status: ProjectStatus::Active,
            arr_milestone: Some("$0".into()),
            lessons: strings(&[
                "Stripe integration into my django site took about 50% of the build duration 2 weeks of 4.",
                "Posting on all channels are not usefull, since ProductHunt all visitors are devs or scouts. QR is kinda old tech and not relevant to the users",
                "Boilerplate is really needed for a smooth future saas dev",
            ]),
            tech_stack: stack(&["HTML", "CSS", "JS"], &["Django"], &["SQLite"], &["Python"]),
            metrics: counts(45, 0),
            links: live("https://qrdive.com"),
        },
        Project {
            id: "Saas-Boilerplate".into(),
            title: "Saas Django Boilerplate".into(),
            description: "Prebuild saas boilerplate with user auth, stripe and defailt items needed in every saas".into(),
            long_description: "After QR dive, I see boilerplate is essential to build my future saas to have a more saass factory. So i never want to spend 2 weeks on stripe again, and also building user auth for every app took about 2h each saas so with this i can simply clone the github boilerplate and save hours of work and directly start with feature development to launch in 40h".into(),
            tags: strings(&["Django", "SaaS", "User Auth", "Stripe"]),
            duration: span("2025-02", "2025-03"),
            project_type: ProjectType::Ongoing,
            status: ProjectStatus::Active,
            arr_milestone: Some("$0".into()),
            lessons: strings(&[
                "Save time by not doing stripe anymore",
                "dont waste time on user auth for every project",
                "Save 100h + of dev time",
            ]),
            tech_stack: stack(&["HTML", "CSS", "JS"], &["Django", "Stripe"], &["SQLite"], &["Django", "Stripe"]),
            metrics: counts(0, 0),
            links: live("https://hoverlab.co"),
        },
        Project {
            id: "Product-Text-Generator".into(),
            title: "Shoptekst - AI Product Description Generator".into(),
            description: "SEO-rich product description generator for Bol.com & shopify sellers.".into(),
            long_description: "Built in 1 week using boilerplate. Uses GPT API for SEO keyword-rich product descriptions. Manual outreach → 2 users but little activity. Learned GPT API + prompt engineering.".into(),
            tags: strings(&["GPT", "SEO", "Ecommerce", "Django"]),
            duration: span("2025-06", "2025-06"),
            project_type: ProjectType::Ongoing,
            status: ProjectStatus::Active,
            arr_milestone: Some("$0".into()),
            lessons: strings(&[
                "Spend 10h to send manual emails to businesses on Bol contact form. with no result.",
                "Perhaps I need a guide JS that teach user how to use my app",
            ]),
            tech_stack: stack(&["HTML", "CSS", "JS"], &["Django", "Stripe"], &["SQLite"], &["Django", "Stripe", "OpenAPI API"]),
            metrics: counts(5, 0),
            links: live("https://shoptekst.nl"),
        },
        Project {
            id: "Barbeon".into(),
            title: "Barbeon - Barber Booking Platform".into(),
            description: "Booking system concept for barbers.".into(),
            long_description: "Landing page MVP to validate barber booking platform idea (reduce no-shows). Similar to ticket sales platform. Early stage only.".into(),
            tags: strings(&["Booking", "Django"]),
            duration: span("2025-07", "2025-07"),
            project_type: ProjectType::Ongoing,
            status: ProjectStatus::Active,
            arr_milestone: Some("$0".into()),
            lessons: Vec::new(),
            tech_stack: stack(&["React"], &["Fast API"], &["SQL"], &["React", "Python", "Fast API"]),
            metrics: counts(0, 0),
            links: live("https://barbeon.com"),
        },
        Project {
            id: "Halalspace".into(),
            title: "Halalspace - Local Event Platform".into(),
            description: "Event posting + future ticket sales with commission.".into(),
            long_description: "Reused boilerplate to build Halalspace MVP in 1 week. Focus on SEO structured URLs for events. First stage = posting only, ticket sales later.".into(),
            tags: strings(&["Events", "SEO", "Web"]),
            duration: span("2025-08", "2025-08"),
            project_type: ProjectType::Ongoing,
            status: ProjectStatus::Active,
            arr_milestone: Some("$0".into()),
            lessons: strings(&[
                "Build a SEO optimized URL for Events in Search Engines like Google",
                "SEO structure critical for event platforms",
            ]),
            tech_stack: stack(&["HTML", "CSS", "JS"], &["Django"], &["SQLite"], &["Django", "Stripe"]),
            metrics: counts(2, 0),
            links: live("https://halalspace.nl"),
        },
        Project {
            id: "Invoicor".into(),
            title: "Invoicor - Free Invoice Generator".into(),
            description: "Free invoice generation tool.".into(),
            long_description: "Built in 10h before uni start. Free tool to auto-generate invoices instead of manual work. Simple and effective.".into(),
            tags: strings(&["Free Tool", "Finance"]),
            duration: span("2025-08", "2025-08"),
            project_type: ProjectType::FreeTool,
            status: ProjectStatus::Active,
            arr_milestone: Some("$0".into()),
            lessons: strings(&["This free tool can promote one of my saas or future saas."]),
            tech_stack: stack(&["HTML", "CSS", "JS"], &["No"], &["No"], &["CSS", "JS"]),
            metrics: counts(21, 0),
            links: live("https://invoicor.com"),
        },
        Project {
            id: "Internship-Scraper".into(),
            title: "Internship & Jobs Scraper".into(),
            description: "Scraper + marketplace for internships/jobs.".into(),
            long_description: "Started for required uni internship. Internship scraper in AI/DS → expandable to job listings + CV checker matching. Long-term vision: free job marketplace.".into(),
            tags: strings(&["Scraper", "Jobs", "AI"]),
            duration: span("2025-09", "2025-11"),
            project_type: ProjectType::FreeTool,
            status: ProjectStatus::Active,
            arr_milestone: Some("$0".into()),
            lessons: Vec::new(),
            tech_stack: stack(&["No"], &["Python"], &["CSV"], &["Python"]),
            metrics: counts(0, 0),
            links: live("https://github.com/xgino/Internship-Scraper"),
        },
    ]
}

fn post(
    id: &str,
    title: &str,
    description: &str,
    content: &str,
    published_at: &str,
    read_time: u32,
    tags: &[&str],
) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: content.to_string(),
        published_at: published_at.to_string(),
        read_time,
        tags: strings(tags),
        featured: false,
    }
}

fn featured(mut post: BlogPost) -> BlogPost {
    post.featured = true;
    post
}

fn blog_posts() -> Vec<BlogPost> {
    vec![
        featured(post(
            "seo-basics",
            "SEO for SaaS: Beyond Head Tags",
            "In-page keyword targeting, indexing, and keeping up with trends.",
            "SEO is not just about meta head tags. You need in-page keyword targeting, adding your site to Google Search Console, and requesting indexing. Keywords should be updated regularly based on trends.",
            "2024-01-10",
            6,
            &["SEO", "SaaS", "Marketing"],
        )),
        post(
            "google-ads-targeting",
            "Google Ads for SaaS: Going Hyper-Specific",
            "Why subcategories and local targeting lower CPC and improve conversion.",
            "Instead of broad keywords, create subcategories. Example: “QR code generator for seasonal sales in Rotterdam.” Very specific keywords mean lower cost per click and higher intent.",
            "2024-02-05",
            7,
            &["Ads", "SaaS", "Growth"],
        ),
        post(
            "seo-urls-platforms",
            "SEO-Friendly URLs for Platforms & SaaS",
            "Dynamic vs stored URLs, broken links, and Google ranking impact.",
            "URLs should contain keywords: e.g. halalspace.nl/events/Bazar_Rotterdam/09sep2025. Problem: if users edit, links break and rankings drop. Fix: save canonical URL in DB and redirect by ID (/events/213).",
            "2024-03-01",
            8,
            &["SEO", "SaaS", "Platforms"],
        ),
        post(
            "head-tags-strategy",
            "Dynamic Head Tags for SaaS Growth",
            "How to generate page-specific SEO head tags for better indexing.",
            "Each mini page (events, ecommerce items) needs its own meta description and keywords. Update tags regularly depending on trends.",
            "2024-03-20",
            5,
            &["SEO", "SaaS"],
        ),
        post(
            "hosting-options",
            "Cheap SaaS Hosting: When Shared Hosting is Enough",
            "Using Namecheap, cPanel, and when to move to VPS.",
            "Namecheap shared hosting: ~€70/year for 10 sites, fine if <500 visitors per month each. SSL costs extra unless on VPS. Good support, but scaling means moving.",
            "2024-04-10",
            6,
            &["Hosting", "SaaS", "Tools"],
        ),
        post(
            "page-speed-matters",
            "Why Page Speed is Critical in SaaS",
            "3s slower load = churn. Optimize images, CSS, JS, load order.",
            "Optimize critical CSS/JS first, defer unused resources. Every second counts, directly impacts retention and revenue.",
            "2024-05-01",
            6,
            &["Performance", "SaaS", "UX"],
        ),
        post(
            "landing-pages-seo",
            "Multi-Landing Pages for SEO Wins",
            "Target different audiences (Amazon, Shopify, Squarespace) with custom pages.",
            "Each landing page should have audience-specific SEO head tags. More targeted pages → more keywords indexed → higher ranking.",
            "2024-05-20",
            7,
            &["SEO", "SaaS", "Growth"],
        ),
        post(
            "analytics-for-saas",
            "Using Analytics to Fix SaaS UX",
            "Google Analytics + PostHog to spot weak points in your funnel.",
            "Check scroll depth, bounce rates, drop-off points. Example: if nobody scrolls past hero, redesign. If users sign up but don’t continue, onboarding fails.",
            "2024-06-05",
            8,
            &["Analytics", "SaaS", "UX"],
        ),
        post(
            "free-tools-strategy",
            "Free Tools as SaaS Marketing (Invoicor Case)",
            "How free tools + AdSense can drive traffic and awareness.",
            "Built Invoicor as free invoice generator. Free tools bring organic traffic, can monetize with AdSense, but you need huge volumes. Works better for blogs/tools than B2B SaaS.",
            "2024-07-01",
            9,
            &["Growth", "SaaS", "Marketing"],
        ),
        featured(post(
            "saas-pricing",
            "Finding the Right SaaS Pricing Strategy",
            "How to research competitors and avoid feature bloat.",
            "Check 5 competitors → map features + pricing. Too few competitors = bad market. Don’t overbuild. Focus on features that sell. Quality > quantity.",
            "2024-08-01",
            10,
            &["Pricing", "SaaS", "Growth"],
        )),
        post(
            "selling-before-building",
            "Sell Before You Build: The SaaS Pre-Sell Strategy",
            "Pitch features before coding to validate demand.",
            "Sometimes you should sell the vision first. Works best for big projects needing investment. Helps validate demand before wasting time building.",
            "2024-09-01",
            7,
            &["Validation", "SaaS", "Strategy"],
        ),
    ]
}

fn milestone(
    id: &str,
    date: &str,
    title: &str,
    description: &str,
    milestone_type: MilestoneType,
) -> Milestone {
    Milestone {
        id: id.to_string(),
        date: date.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        milestone_type,
        value: None,
    }
}

fn milestones() -> Vec<Milestone> {
    use MilestoneType::{Launch, Learning};

    vec![
        milestone("maps-scraper-build", "2023-12", "Built Google Maps Scraper", "Created CLI scraper integrated with Github", Learning),
        milestone("email-scraper-build", "2023-12", "Built Email Scraper", "Automated tool to scrape emails from websites", Learning),
        milestone("dating-app-failure", "2024-03", "Dating App Dropped", "80% built but failed due to critical marketing issues", Learning),
        milestone("webresolute Webagency", "2024-04", "Started Webresolute Agency", "Launched freelance web agency, later dropped due to burnout risk", Learning),
        milestone("bolar Dataangency", "2024-05", "Bolar Data Agency Dropped", "No buyers due to lack of marketing/SEO", Learning),
        milestone("Sandhook-Build", "2024-06", "Sandhook Cold Email Automation", "Built CLI backend for cold emails, project not completed", Learning),
        milestone("QRDive-launch", "2024-10", "QRDive SaaS Launch", "First SaaS with Stripe subscriptions and QR tracking", Launch),
        milestone("ads-test-webresolute", "2024-09", "Spent €200 on Ads", "Tried ads for Webresolute → no clients, wasted money", Learning),
        milestone("stripe-boilerplate", "2025-02", "Stripe Boilerplate Build", "Created boilerplate to save weeks on future SaaS billing integrations", Learning),
        milestone("ads-test-qrdive", "2025-03", "Spent €200 Ads on QRDive", "Another failed ad test, deeper learning on ads creation", Learning),
        milestone("shoptekst-launch", "2025-06", "Shoptekst Launched", "SEO-rich product description generator built in 1 week", Launch),
        milestone("barbeon-start", "2025-07", "Barbeon MVP Landing Page", "Barber booking platform idea validation via landing page", Launch),
        milestone("halalspace-launch", "2025-08", "Halalspace MVP Launched", "Local event posting platform launched in 1 week", Launch),
        milestone("invoicor-launch", "2025-08", "Invoicor Built in 10h", "Launched free invoice generator tool", Launch),
        milestone("internship-scraper-start", "2025-09", "Internship Scraper Start", "Started scraper for internships and jobs, expandable to CV checker", Learning),
    ]
}

fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Gin".into(),
        title: "SaaS Founder & Indie Hacker".into(),
        bio: "Building my way to $1M ARR through multiple SaaS products. I share everything I learn about building, growing, and scaling software businesses.".into(),
        current_mrr: 0,
        total_users: 124,
        products_built: 13,
        years_building: 2,
        location: "The Netherland".into(),
        email: "qingge43@gmail.com".into(),
        social: BTreeMap::from([
            ("twitter".to_string(), String::new()),
            ("linkedin".to_string(), String::new()),
            ("github".to_string(), "https://github.com/xgino".to_string()),
        ]),
    }
}
