use soroban_sdk::String;

use crate::{errors::LedgerError, MAX_BPS, MAX_STRING_LENGTH};

pub fn validate_label(label: &String) -> Result<(), LedgerError> {
    if label.len() == 0 || label.len() > MAX_STRING_LENGTH {
        return Err(LedgerError::InvalidInput);
    }
    Ok(())
}

pub fn validate_nonzero_id(id: u64) -> Result<(), LedgerError> {
    if id == 0 {
        return Err(LedgerError::RoomNotFound);
    }
    Ok(())
}

/// Attached amounts are signed on the token interface; negative values are never valid.
pub fn validate_amount(amount: i128) -> Result<(), LedgerError> {
    if amount < 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}

pub fn validate_config(
    unit_scale: i128,
    rent_period_seconds: u64,
    termination_penalty_bps: u32,
) -> Result<(), LedgerError> {
    if unit_scale <= 0 || rent_period_seconds == 0 || termination_penalty_bps > MAX_BPS {
        return Err(LedgerError::InvalidConfig);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn label_validation_works() {
        let env = Env::default();
        assert!(validate_label(&String::from_str(&env, "101")).is_ok());
        assert_eq!(
            validate_label(&String::from_str(&env, "")),
            Err(LedgerError::InvalidInput)
        );

        let long = [b'a'; (MAX_STRING_LENGTH + 1) as usize];
        let long = String::from_str(&env, core::str::from_utf8(&long).unwrap());
        assert_eq!(validate_label(&long), Err(LedgerError::InvalidInput));
    }

    #[test]
    fn amount_and_id_validation_works() {
        assert!(validate_amount(0).is_ok());
        assert_eq!(validate_amount(-1), Err(LedgerError::InvalidAmount));
        assert!(validate_nonzero_id(1).is_ok());
        assert_eq!(validate_nonzero_id(0), Err(LedgerError::RoomNotFound));
    }

    #[test]
    fn config_validation_works() {
        assert!(validate_config(1, 1, 0).is_ok());
        assert!(validate_config(crate::DEFAULT_UNIT_SCALE, 86_400, MAX_BPS).is_ok());
        assert_eq!(validate_config(0, 1, 0), Err(LedgerError::InvalidConfig));
        assert_eq!(validate_config(1, 0, 0), Err(LedgerError::InvalidConfig));
        assert_eq!(validate_config(1, 1, MAX_BPS + 1), Err(LedgerError::InvalidConfig));
    }
}
