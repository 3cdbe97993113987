//! Built-in sample content.
//!
//! The record set the platform ships for demos and tests; real
//! deployments load a JSON content store instead.

use crate::records::{Campaign, Session, Tip};
use crate::store::ContentStore;

pub(crate) fn store() -> ContentStore {
    ContentStore {
        tips: tips(),
        campaigns: campaigns(),
        sessions: sessions(),
    }
}

fn tips() -> Vec<Tip> {
    vec![
        Tip {
            id: "1".to_string(),
            title: "Personal Safety During Public Transport".to_string(),
            content: "Always be aware of your surroundings while using public transport. \
                      Keep your belongings secure and visible."
                .to_string(),
            category: "Personal Safety".to_string(),
            target_audience: "Youth (13-17)".to_string(),
            priority: "High Impact".to_string(),
            estimated_impact: "5000".to_string(),
            tags: vec![
                "safety".to_string(),
                "transport".to_string(),
                "awareness".to_string(),
            ],
            author: "Safety NGO Kenya".to_string(),
            timestamp: "2024-01-15".to_string(),
            views: 1250,
            likes: 89,
        },
        Tip {
            id: "2".to_string(),
            title: "Online Privacy Protection Tips".to_string(),
            content: "Protect your personal information online by using strong passwords \
                      and enabling two-factor authentication."
                .to_string(),
            category: "Digital Security".to_string(),
            target_audience: "Young Adults (18-24)".to_string(),
            priority: "High Impact".to_string(),
            estimated_impact: "7500".to_string(),
            tags: vec![
                "privacy".to_string(),
                "security".to_string(),
                "digital".to_string(),
            ],
            author: "Digital Rights Initiative".to_string(),
            timestamp: "2024-01-14".to_string(),
            views: 2100,
            likes: 156,
        },
    ]
}

fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "1".to_string(),
            title: "Anti-Bullying Campaign 2024".to_string(),
            description: "Working together to create bully-free schools and communities"
                .to_string(),
            campaign_type: "Awareness Campaign".to_string(),
            target_audience: "Youth (13-17)".to_string(),
            start_date: "2024-02-01".to_string(),
            end_date: "2024-02-28".to_string(),
            platforms: vec!["Social Media".to_string(), "School Programs".to_string()],
            budget: "50000".to_string(),
            goals: "Reduce bullying incidents by 30% in target schools".to_string(),
            kpis: vec![
                "Reach 10,000 students".to_string(),
                "500 campaign participants".to_string(),
            ],
            keywords: vec![
                "anti-bullying".to_string(),
                "safety".to_string(),
                "youth".to_string(),
            ],
            author: "Youth Empowerment Network".to_string(),
            timestamp: "2024-01-10".to_string(),
            views: 3200,
            participants: 450,
        },
        Campaign {
            id: "2".to_string(),
            title: "Digital Safety Awareness Month".to_string(),
            description: "Promoting online safety practices across Kenya".to_string(),
            campaign_type: "Safety Education".to_string(),
            target_audience: "General Public".to_string(),
            start_date: "2024-03-01".to_string(),
            end_date: "2024-03-31".to_string(),
            platforms: vec![
                "Social Media".to_string(),
                "SMS/Text".to_string(),
                "Community Events".to_string(),
            ],
            budget: "75000".to_string(),
            goals: "Educate 50,000 people about digital safety".to_string(),
            kpis: vec![
                "25,000 social media impressions".to_string(),
                "10,000 SMS engagements".to_string(),
            ],
            keywords: vec![
                "digital".to_string(),
                "safety".to_string(),
                "awareness".to_string(),
            ],
            author: "TechSafe Kenya".to_string(),
            timestamp: "2024-01-08".to_string(),
            views: 2800,
            participants: 680,
        },
    ]
}

fn sessions() -> Vec<Session> {
    vec![
        Session {
            id: "1".to_string(),
            title: "Mental Health & Youth Wellness".to_string(),
            description: "Expert discussion on mental health challenges faced by youth"
                .to_string(),
            session_type: "Expert Discussion".to_string(),
            topic: "Mental Health & Wellness".to_string(),
            max_participants: "50".to_string(),
            duration: "60 minutes".to_string(),
            scheduled_date: "2024-02-15".to_string(),
            scheduled_time: "14:00".to_string(),
            facilitator: "Dr. Sarah Johnson".to_string(),
            target_audience: "Young Adults (18-24)".to_string(),
            expected_outcomes: "Increased awareness and coping strategies".to_string(),
            engagement_metrics: vec![
                "Questions asked: 25".to_string(),
                "Participants engaged: 45".to_string(),
            ],
            resources: vec![
                "Mental health guide".to_string(),
                "Coping strategies PDF".to_string(),
            ],
            tags: vec![
                "mental health".to_string(),
                "wellness".to_string(),
                "expert".to_string(),
            ],
            author: "Mental Health Foundation".to_string(),
            timestamp: "2024-01-12".to_string(),
            views: 1800,
            registrations: 42,
        },
        Session {
            id: "2".to_string(),
            title: "Online Safety Q&A for Parents".to_string(),
            description: "Live session addressing online safety concerns for parents"
                .to_string(),
            session_type: "Live Q&A Session".to_string(),
            topic: "Online Safety".to_string(),
            max_participants: "100".to_string(),
            duration: "90 minutes".to_string(),
            scheduled_date: "2024-02-20".to_string(),
            scheduled_time: "19:00".to_string(),
            facilitator: "Tech Safety Expert".to_string(),
            target_audience: "Parents & Guardians".to_string(),
            expected_outcomes: "Practical online safety strategies for families".to_string(),
            engagement_metrics: vec![
                "Questions answered: 40".to_string(),
                "Participants: 85".to_string(),
            ],
            resources: vec![
                "Parent guide to online safety".to_string(),
                "Monitoring tools list".to_string(),
            ],
            tags: vec![
                "online safety".to_string(),
                "parents".to_string(),
                "q&a".to_string(),
            ],
            author: "Digital Family Protection".to_string(),
            timestamp: "2024-01-11".to_string(),
            views: 2200,
            registrations: 78,
        },
    ]
}
