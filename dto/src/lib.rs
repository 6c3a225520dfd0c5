pub mod club_stats;
pub mod member_record;
