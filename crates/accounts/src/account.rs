use serde::Serialize;

use bankacct_core::{AggregateId, AggregateRoot, DomainError, DomainResult};

/// Account identifier.
///
/// Clones of an [`Account`] keep its id, so two handles with the same id are
/// the same account.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(pub AggregateId);

impl AccountId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Account status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl core::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccountStatus::Active => f.write_str("Active"),
            AccountStatus::Inactive => f.write_str("Inactive"),
        }
    }
}

/// Aggregate root: Account.
///
/// Invariants held after every operation:
/// - `holder` is not blank;
/// - `balance` is finite and never negative;
/// - balance only moves while the account is active;
/// - the account is only deactivated at a zero balance.
///
/// There is no internal synchronization. Mutation needs `&mut Account`, so
/// sharing one across threads means wrapping it (e.g. in a `Mutex`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    id: AccountId,
    holder: String,
    balance: f64,
    active: bool,
    version: u64,
}

impl Account {
    /// Open a new, active account with a freshly generated id.
    pub fn open(holder: impl Into<String>, initial_balance: f64) -> DomainResult<Self> {
        Self::open_with_id(AccountId::new(AggregateId::new()), holder, initial_balance)
    }

    /// Open a new, active account with an explicit id.
    pub fn open_with_id(
        id: AccountId,
        holder: impl Into<String>,
        initial_balance: f64,
    ) -> DomainResult<Self> {
        let holder = holder.into();
        ensure_holder(&holder)?;

        if !initial_balance.is_finite() {
            return Err(DomainError::invalid_argument(
                "initial balance must be a finite number",
            ));
        }
        if initial_balance < 0.0 {
            return Err(DomainError::invalid_argument(
                "initial balance cannot be negative",
            ));
        }

        tracing::debug!(account_id = %id, balance = initial_balance, "account opened");

        Ok(Self {
            id,
            holder,
            // Normalizes -0.0.
            balance: initial_balance + 0.0,
            active: true,
            version: 0,
        })
    }

    pub fn id_typed(&self) -> AccountId {
        self.id
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn status(&self) -> AccountStatus {
        if self.active {
            AccountStatus::Active
        } else {
            AccountStatus::Inactive
        }
    }

    /// Rename the account holder.
    pub fn set_holder(&mut self, holder: impl Into<String>) -> DomainResult<()> {
        let holder = holder.into();
        ensure_holder(&holder).map_err(|e| self.rejected("set_holder", e))?;

        self.holder = holder;
        self.version += 1;
        tracing::debug!(account_id = %self.id, "holder changed");
        Ok(())
    }

    /// Mark the account active. Always succeeds.
    pub fn activate(&mut self) {
        self.active = true;
        self.version += 1;
        tracing::debug!(account_id = %self.id, "account activated");
    }

    /// Mark the account inactive. Only allowed with a zero balance.
    pub fn deactivate(&mut self) -> DomainResult<()> {
        if self.balance > 0.0 {
            return Err(self.rejected(
                "deactivate",
                DomainError::invalid_state("cannot deactivate an account with a positive balance"),
            ));
        }

        self.active = false;
        self.version += 1;
        tracing::debug!(account_id = %self.id, "account deactivated");
        Ok(())
    }

    pub fn deposit(&mut self, amount: f64) -> DomainResult<()> {
        self.ensure_active("deposit")?;
        ensure_amount("deposit", amount).map_err(|e| self.rejected("deposit", e))?;
        let next = self.balance + amount;
        if !next.is_finite() {
            return Err(self.rejected(
                "deposit",
                DomainError::invalid_argument("deposit would overflow the balance"),
            ));
        }

        self.balance = next;
        self.version += 1;
        tracing::debug!(account_id = %self.id, amount, balance = self.balance, "deposit applied");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: f64) -> DomainResult<()> {
        self.ensure_active("withdraw")?;
        ensure_amount("withdrawal", amount).map_err(|e| self.rejected("withdraw", e))?;
        if amount > self.balance {
            return Err(self.rejected(
                "withdraw",
                DomainError::invalid_argument("insufficient balance"),
            ));
        }

        self.balance -= amount;
        self.version += 1;
        tracing::debug!(
            account_id = %self.id,
            amount,
            balance = self.balance,
            "withdrawal applied"
        );
        Ok(())
    }

    /// Move `amount` from this account into `destination`.
    ///
    /// `None` stands for a missing destination and is rejected. The source is
    /// debited through [`Account::withdraw`] before the destination is credited
    /// through [`Account::deposit`]; if the deposit were to fail, the source
    /// stays debited.
    pub fn transfer(
        &mut self,
        amount: f64,
        destination: Option<&mut Account>,
    ) -> DomainResult<()> {
        let Some(destination) = destination else {
            return Err(self.rejected(
                "transfer",
                DomainError::invalid_argument("destination account is required"),
            ));
        };

        let span = tracing::debug_span!(
            "transfer",
            source = %self.id,
            destination = %destination.id,
            amount
        );
        let _guard = span.enter();

        if !self.active {
            return Err(self.rejected(
                "transfer",
                DomainError::invalid_state("source account is inactive"),
            ));
        }
        if !destination.active {
            return Err(self.rejected(
                "transfer",
                DomainError::invalid_state("destination account is inactive"),
            ));
        }
        if self.id == destination.id {
            return Err(self.rejected(
                "transfer",
                DomainError::invalid_argument("cannot transfer to the same account"),
            ));
        }

        self.withdraw(amount)?;
        destination.deposit(amount)?;
        Ok(())
    }

    /// Shorthand for [`Account::transfer`] with a present destination.
    pub fn transfer_to(&mut self, amount: f64, destination: &mut Account) -> DomainResult<()> {
        self.transfer(amount, Some(destination))
    }

    /// Human-readable one-line summary.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn ensure_active(&self, op: &'static str) -> DomainResult<()> {
        if self.active {
            Ok(())
        } else {
            Err(self.rejected(op, DomainError::invalid_state("account is inactive")))
        }
    }

    fn rejected(&self, op: &'static str, err: DomainError) -> DomainError {
        tracing::debug!(account_id = %self.id, op, error = %err, "operation rejected");
        err
    }
}

impl AggregateRoot for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Account of {} - Balance: $ {:.2} - {}",
            self.holder,
            self.balance,
            self.status()
        )
    }
}

fn ensure_holder(holder: &str) -> DomainResult<()> {
    if holder.trim().is_empty() {
        return Err(DomainError::invalid_argument("holder cannot be blank"));
    }
    Ok(())
}

fn ensure_amount(what: &str, amount: f64) -> DomainResult<()> {
    if !amount.is_finite() {
        return Err(DomainError::invalid_argument(format!(
            "{what} amount must be a finite number"
        )));
    }
    if amount <= 0.0 {
        return Err(DomainError::invalid_argument(format!(
            "{what} amount must be positive"
        )));
    }
    Ok(())
}
