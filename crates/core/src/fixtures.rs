//! Demo seed data
//!
//! The mock members, campaigns, permissions, and leads the dashboard ships
//! with. Used to seed the in-memory stores on startup and as fixture data in
//! tests. Identifiers are generated per call, so the returned bundle keeps
//! the cross-references consistent.

use chrono::{DateTime, TimeZone, Utc};

use crate::campaign::{Campaign, CampaignStatus};
use crate::lead::{Lead, LeadStatus};
use crate::member::{Member, MemberRole, MemberStatus};
use crate::permission::PermissionRecord;

/// One consistent bundle of demo records
#[derive(Debug, Clone)]
pub struct DemoData {
    pub members: Vec<Member>,
    pub campaigns: Vec<Campaign>,
    pub permissions: Vec<PermissionRecord>,
    pub leads: Vec<Lead>,
}

/// Build the demo bundle
pub fn demo_data() -> DemoData {
    let members = vec![
        Member::new("John Doe", "john@example.com").with_role(MemberRole::Admin),
        Member::new("Jane Smith", "jane@example.com").with_role(MemberRole::Manager),
        Member::new("Mike Johnson", "mike@example.com").with_status(MemberStatus::Inactive),
    ];

    let campaigns = vec![
        demo_campaign(
            "Summer Promotion",
            "https://example.com/summer",
            "camp_summerpromotion_a1b2c3d4",
            date(2023, 6, 15),
            CampaignStatus::Active,
            124,
        ),
        demo_campaign(
            "Product Launch",
            "https://example.com/launch",
            "camp_productlaunch_e5f6g7h8",
            date(2023, 9, 1),
            CampaignStatus::Active,
            87,
        ),
        demo_campaign(
            "Holiday Special",
            "https://example.com/holiday",
            "camp_holidayspecial_i9j0k1l2",
            date(2023, 11, 20),
            CampaignStatus::Inactive,
            45,
        ),
    ];

    let permissions = vec![
        granted(&members[0], &campaigns[0]),
        granted(&members[0], &campaigns[1]),
        granted(&members[1], &campaigns[0]),
        granted(&members[2], &campaigns[2]),
    ];

    let leads = vec![
        Lead::new(
            "John Smith",
            "john.smith@example.com",
            campaigns[0].id,
            &campaigns[0].name,
        )
        .with_submitted_at(date(2023, 6, 15))
        .with_location("New York, USA")
        .with_phone("+1 (555) 123-4567")
        .with_region("North America")
        .with_message("I'm interested in learning more about your enterprise solutions."),
        Lead::new(
            "Sarah Johnson",
            "sarah.j@company.co",
            campaigns[1].id,
            &campaigns[1].name,
        )
        .with_submitted_at(date(2023, 6, 14))
        .with_status(LeadStatus::Contacted)
        .with_opened(true)
        .with_location("London, UK")
        .with_phone("+44 20 1234 5678")
        .with_region("Europe")
        .with_message("Please send me pricing information for your small business package."),
        Lead::new(
            "Miguel Rodriguez",
            "miguel@startup.io",
            campaigns[0].id,
            &campaigns[0].name,
        )
        .with_submitted_at(date(2023, 6, 13))
        .with_status(LeadStatus::Qualified)
        .with_opened(true)
        .with_location("Barcelona, Spain")
        .with_phone("+34 612 345 678")
        .with_region("Europe")
        .with_message(
            "We're looking to implement your solution across our organization of 50+ employees.",
        ),
        Lead::new(
            "Aisha Patel",
            "a.patel@tech.com",
            campaigns[2].id,
            &campaigns[2].name,
        )
        .with_submitted_at(date(2023, 6, 12))
        .with_status(LeadStatus::Unqualified)
        .with_location("Mumbai, India")
        .with_phone("+91 98765 43210")
        .with_region("Asia")
        .with_message("Just researching options at this point. No immediate plans to purchase."),
        Lead::new(
            "David Chen",
            "david.chen@global.org",
            campaigns[1].id,
            &campaigns[1].name,
        )
        .with_submitted_at(date(2023, 6, 11))
        .with_opened(true)
        .with_location("Singapore")
        .with_phone("+65 8765 4321")
        .with_region("Asia")
        .with_message("Looking for a solution that can handle international compliance requirements."),
        Lead::new(
            "Emma Wilson",
            "emma.w@tech.startup",
            campaigns[2].id,
            &campaigns[2].name,
        )
        .with_submitted_at(date(2023, 6, 10))
        .with_location("Toronto, Canada")
        .with_phone("+1 (416) 555-0123")
        .with_region("North America")
        .with_message("Interested in your services for our growing team."),
    ];

    DemoData {
        members,
        campaigns,
        permissions,
        leads,
    }
}

fn demo_campaign(
    name: &str,
    website: &str,
    api_key: &str,
    created_at: DateTime<Utc>,
    status: CampaignStatus,
    leads: u32,
) -> Campaign {
    Campaign {
        id: uuid::Uuid::new_v4(),
        name: name.to_string(),
        website: website.to_string(),
        api_key: api_key.to_string(),
        created_at,
        status,
        leads,
    }
}

fn granted(member: &Member, campaign: &Campaign) -> PermissionRecord {
    PermissionRecord {
        member_id: member.id,
        member_name: member.name.clone(),
        campaign_id: campaign.id,
        campaign_name: campaign.name.clone(),
        has_access: true,
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("fixture dates are valid")
}
