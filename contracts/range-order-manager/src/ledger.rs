// ============================================================================
// ORDER LEDGER
// ============================================================================
// Sole owner of position records and per-owner liquidity shares.
//
// Trading fees are tracked per unit of owner share: the position carries a
// growth accumulator per token and every owner a checkpoint of it. An
// owner's fees are settled against their old share before the share
// changes, so deposits, exits and resolution never move fees between
// owners.
//
// Mutating methods take the position by `&mut` and leave persisting it to
// the caller (`save`), so a flow can apply several owner updates and write
// the record once. Balance and registry entries are written immediately.
// ============================================================================

use crate::invariants::{fees_within_held, owners_within_total, share_within_total};
use crate::storage;
use range_order_math::{allocate_share, fee_growth_delta, fees_earned};
use range_order_types::{OrderPosition, OwnerFees, RangeOrderError, MAX_PAGE_SIZE};
use soroban_sdk::{Address, BytesN, Env, Vec};

pub struct OrderLedger<'a> {
    env: &'a Env,
    key: BytesN<32>,
}

impl<'a> OrderLedger<'a> {
    pub fn new(env: &'a Env, key: BytesN<32>) -> Self {
        Self { env, key }
    }

    pub fn position(&self) -> Option<OrderPosition> {
        storage::get_position(self.env, &self.key).filter(|position| position.is_live())
    }

    /// Live position, or `PositionNotFound`
    pub fn require_position(&self) -> Result<OrderPosition, RangeOrderError> {
        self.position().ok_or(RangeOrderError::PositionNotFound)
    }

    pub fn save(&self, position: &OrderPosition) {
        storage::set_position(self.env, &self.key, position);
    }

    pub fn remove(&self) {
        storage::remove_position(self.env, &self.key);
    }

    pub fn balance_of(&self, owner: &Address) -> u128 {
        storage::get_balance(self.env, &self.key, owner)
    }

    /// Credit `owner` with their floor share of a freshly minted batch
    ///
    /// `position.liquidity` must already include `liquidity_minted`. An input
    /// too small to earn a whole unit of liquidity credits nothing.
    ///
    /// Returns the share credited.
    pub fn record_deposit(
        &self,
        position: &mut OrderPosition,
        owner: &Address,
        input_amount: i128,
        total_input_amount: i128,
        liquidity_minted: u128,
    ) -> Result<u128, RangeOrderError> {
        let share = allocate_share(self.env, liquidity_minted, input_amount, total_input_amount)?;
        if share == 0 {
            return Ok(0);
        }

        let balance = self.balance_of(owner);
        let fees = self.settle_fees(position, owner, balance)?;
        storage::set_owner_fees(self.env, &self.key, owner, &fees);
        if balance == 0 {
            self.register_owner(position, owner)?;
        }

        let balance = balance
            .checked_add(share)
            .ok_or(RangeOrderError::ArithmeticOverflow)?;
        position.owner_liquidity = position
            .owner_liquidity
            .checked_add(share)
            .ok_or(RangeOrderError::ArithmeticOverflow)?;

        self.check(position, balance)?;
        storage::set_balance(self.env, &self.key, owner, balance);
        Ok(share)
    }

    /// Credit fees just collected from the external position to the
    /// current owners, pro rata to their shares
    pub fn accrue_fees(
        &self,
        position: &mut OrderPosition,
        fee0: u128,
        fee1: u128,
    ) -> Result<(), RangeOrderError> {
        position.fee_growth0 = position
            .fee_growth0
            .checked_add(fee_growth_delta(self.env, fee0, position.owner_liquidity)?)
            .ok_or(RangeOrderError::ArithmeticOverflow)?;
        position.fee_growth1 = position
            .fee_growth1
            .checked_add(fee_growth_delta(self.env, fee1, position.owner_liquidity)?)
            .ok_or(RangeOrderError::ArithmeticOverflow)?;
        position.fees_held0 = position
            .fees_held0
            .checked_add(fee0)
            .ok_or(RangeOrderError::ArithmeticOverflow)?;
        position.fees_held1 = position
            .fees_held1
            .checked_add(fee1)
            .ok_or(RangeOrderError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Debit `liquidity` from `owner` and from the position total
    ///
    /// Returns: (fee0, fee1) the owner has earned so far, now released from
    /// the position's held fees
    pub fn record_withdrawal(
        &self,
        position: &mut OrderPosition,
        owner: &Address,
        liquidity: u128,
    ) -> Result<(u128, u128), RangeOrderError> {
        let balance = self.balance_of(owner);
        if balance == 0 {
            return Err(RangeOrderError::NotOwner);
        }
        if liquidity > balance {
            return Err(RangeOrderError::InsufficientLiquidity);
        }

        let fees = self.release_fees(position, owner, balance)?;

        let balance = balance - liquidity;
        position.liquidity = position
            .liquidity
            .checked_sub(liquidity)
            .ok_or(RangeOrderError::LedgerInvariant)?;
        position.owner_liquidity = position
            .owner_liquidity
            .checked_sub(liquidity)
            .ok_or(RangeOrderError::LedgerInvariant)?;

        self.check(position, balance)?;
        storage::set_balance(self.env, &self.key, owner, balance);
        if balance == 0 {
            storage::remove_owner_fees(self.env, &self.key, owner);
            self.unregister_owner(position, owner)?;
        }
        Ok(fees)
    }

    /// Release every fee `owner` has earned on their recorded share
    ///
    /// Used at resolution, before the shares are cleared.
    pub fn claim_fees(
        &self,
        position: &mut OrderPosition,
        owner: &Address,
    ) -> Result<(u128, u128), RangeOrderError> {
        let balance = self.balance_of(owner);
        self.release_fees(position, owner, balance)
    }

    /// Zero every owner share and the position total
    pub fn clear_all(&self, position: &mut OrderPosition) {
        for index in 0..position.owner_count {
            if let Some(owner) = storage::get_owner_at(self.env, &self.key, index) {
                storage::set_balance(self.env, &self.key, &owner, 0);
                storage::remove_owner_index(self.env, &self.key, &owner);
                storage::remove_owner_fees(self.env, &self.key, &owner);
            }
            storage::remove_owner_at(self.env, &self.key, index);
        }

        position.liquidity = 0;
        position.owner_liquidity = 0;
        position.owner_count = 0;
    }

    /// Owners of the key, `limit` capped at `MAX_PAGE_SIZE`
    pub fn owners(&self, start_index: u32, limit: u32) -> Vec<Address> {
        let mut owners = Vec::new(self.env);
        let Some(position) = self.position() else {
            return owners;
        };

        let safe_limit = limit.min(MAX_PAGE_SIZE);
        let end_index = start_index
            .saturating_add(safe_limit)
            .min(position.owner_count);

        for index in start_index..end_index {
            if let Some(owner) = storage::get_owner_at(self.env, &self.key, index) {
                owners.push_back(owner);
            }
        }
        owners
    }

    /// Bring an owner's checkpoint up to the position's fee growth, moving
    /// what `balance` earned since the last checkpoint into `owed`
    fn settle_fees(
        &self,
        position: &OrderPosition,
        owner: &Address,
        balance: u128,
    ) -> Result<OwnerFees, RangeOrderError> {
        let fees = match storage::get_owner_fees(self.env, &self.key, owner) {
            Some(fees) => fees,
            None if balance == 0 => OwnerFees {
                growth0: position.fee_growth0,
                growth1: position.fee_growth1,
                owed0: 0,
                owed1: 0,
            },
            None => return Err(RangeOrderError::LedgerInvariant),
        };

        let earned0 = fees_earned(self.env, balance, position.fee_growth0, fees.growth0)?;
        let earned1 = fees_earned(self.env, balance, position.fee_growth1, fees.growth1)?;

        Ok(OwnerFees {
            growth0: position.fee_growth0,
            growth1: position.fee_growth1,
            owed0: fees
                .owed0
                .checked_add(earned0)
                .ok_or(RangeOrderError::ArithmeticOverflow)?,
            owed1: fees
                .owed1
                .checked_add(earned1)
                .ok_or(RangeOrderError::ArithmeticOverflow)?,
        })
    }

    /// Settle and pay out an owner's fees from the held balance
    fn release_fees(
        &self,
        position: &mut OrderPosition,
        owner: &Address,
        balance: u128,
    ) -> Result<(u128, u128), RangeOrderError> {
        let fees = self.settle_fees(position, owner, balance)?;
        if !fees_within_held(fees.owed0, position.fees_held0)
            || !fees_within_held(fees.owed1, position.fees_held1)
        {
            return Err(RangeOrderError::LedgerInvariant);
        }

        position.fees_held0 -= fees.owed0;
        position.fees_held1 -= fees.owed1;
        storage::set_owner_fees(
            self.env,
            &self.key,
            owner,
            &OwnerFees {
                owed0: 0,
                owed1: 0,
                ..fees
            },
        );
        Ok((fees.owed0, fees.owed1))
    }

    fn check(&self, position: &OrderPosition, balance: u128) -> Result<(), RangeOrderError> {
        if !share_within_total(balance, position.liquidity)
            || !owners_within_total(position.owner_liquidity, position.liquidity)
        {
            return Err(RangeOrderError::LedgerInvariant);
        }
        Ok(())
    }

    /// Append to the owner registry - O(1)
    fn register_owner(&self, position: &mut OrderPosition, owner: &Address) -> Result<(), RangeOrderError> {
        let index = position.owner_count;
        storage::set_owner_at(self.env, &self.key, index, owner);
        storage::set_owner_index(self.env, &self.key, owner, index);
        position.owner_count = index
            .checked_add(1)
            .ok_or(RangeOrderError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Remove from the owner registry using swap-and-pop - O(1)
    fn unregister_owner(&self, position: &mut OrderPosition, owner: &Address) -> Result<(), RangeOrderError> {
        let index = storage::get_owner_index(self.env, &self.key, owner)
            .ok_or(RangeOrderError::LedgerInvariant)?;
        let last_index = position
            .owner_count
            .checked_sub(1)
            .ok_or(RangeOrderError::LedgerInvariant)?;

        if index != last_index {
            let last_owner = storage::get_owner_at(self.env, &self.key, last_index)
                .ok_or(RangeOrderError::LedgerInvariant)?;
            storage::set_owner_at(self.env, &self.key, index, &last_owner);
            storage::set_owner_index(self.env, &self.key, &last_owner, index);
        }

        storage::remove_owner_at(self.env, &self.key, last_index);
        storage::remove_owner_index(self.env, &self.key, owner);
        position.owner_count = last_index;
        Ok(())
    }
}
