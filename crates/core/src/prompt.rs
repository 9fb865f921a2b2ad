//! Prompt assembly for the hospital assistant

use crate::knowledge::HospitalRecord;
use crate::resolver;

const PERSONA: &str = "You are a virtual assistant for Nakuru Referral Hospital. \
Keep responses clear, concise, and helpful. \
Do not provide contact details unless explicitly asked.";

/// Combine the persona, resolved hospital data, and the user's message
pub fn assemble_prompt(hospital_data: &str, user_message: &str) -> String {
    format!("{PERSONA}\n\nHospital Data: {hospital_data}\nUser: {user_message}\nAssistant:")
}

/// Resolve the message against the knowledge base and build the full prompt
pub fn hospital_assistant_prompt(record: &HospitalRecord, user_message: &str) -> String {
    let hospital_data = resolver::resolve(record, user_message);
    assemble_prompt(&hospital_data, user_message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::NO_MATCH_REPLY;

    #[test]
    fn layout() {
        let prompt = assemble_prompt("📍 Hospital Location: Nakuru", "Where are you?");
        assert_eq!(
            prompt,
            "You are a virtual assistant for Nakuru Referral Hospital. \
             Keep responses clear, concise, and helpful. \
             Do not provide contact details unless explicitly asked.\n\n\
             Hospital Data: 📍 Hospital Location: Nakuru\n\
             User: Where are you?\n\
             Assistant:"
        );
    }

    #[test]
    fn user_message_is_verbatim() {
        let prompt = hospital_assistant_prompt(&HospitalRecord::default(), "  HeLLo \n");
        assert!(prompt.contains(&format!("Hospital Data: {NO_MATCH_REPLY}\n")));
        assert!(prompt.contains("User:   HeLLo \n\nAssistant:"));
    }
}
