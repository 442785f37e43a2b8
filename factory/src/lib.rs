#![no_std]

multiversx_sc::imports!();

pub mod factory_proxy;

use crowdfund_campaign::campaign_proxy::CampaignProxy;
use crowdfund_campaign::errors::ERR_ZERO_MINIMUM;

pub const ERR_INVALID_TEMPLATE: &str = "Campaign template must be a deployed contract";

// ============================================================
// Contract
// ============================================================

/// Deploys campaigns from a template contract's code and keeps the
/// ordered list of every campaign it created.
#[multiversx_sc::contract]
pub trait CampaignFactory {
    #[init]
    fn init(&self, campaign_template: ManagedAddress) {
        self.store_template(&campaign_template);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createCampaign
    // The caller becomes the new campaign's manager.
    // ========================================================

    #[endpoint(createCampaign)]
    fn create_campaign(&self, minimum_contribution: BigUint) -> ManagedAddress {
        require!(minimum_contribution > 0u64, ERR_ZERO_MINIMUM);

        let caller = self.blockchain().get_caller();
        let campaign_address = self
            .tx()
            .typed(CampaignProxy)
            .init(&minimum_contribution, OptionalValue::Some(caller.clone()))
            .from_source(self.campaign_template().get())
            .code_metadata(CodeMetadata::UPGRADEABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        let campaign_index = self.deployed_campaigns().len() as u64;
        self.deployed_campaigns().push(&campaign_address);

        self.campaign_created_event(
            campaign_index,
            &campaign_address,
            &caller,
            &minimum_contribution,
        );

        campaign_address
    }

    /// Only affects campaigns created afterwards.
    #[only_owner]
    #[endpoint(setCampaignTemplate)]
    fn set_campaign_template(&self, campaign_template: ManagedAddress) {
        self.store_template(&campaign_template);
    }

    fn store_template(&self, campaign_template: &ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(campaign_template),
            ERR_INVALID_TEMPLATE
        );
        self.campaign_template().set(campaign_template);
        self.campaign_template_changed_event(campaign_template);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getDeployedCampaigns)]
    fn get_deployed_campaigns(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for campaign_address in self.deployed_campaigns().iter() {
            result.push(campaign_address);
        }
        result
    }

    #[view(getDeployedCampaignsCount)]
    fn get_deployed_campaigns_count(&self) -> u64 {
        self.deployed_campaigns().len() as u64
    }

    #[view(getCampaignTemplate)]
    fn get_campaign_template(&self) -> ManagedAddress {
        self.campaign_template().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("campaignCreated")]
    fn campaign_created_event(
        &self,
        #[indexed] campaign_index: u64,
        #[indexed] campaign: &ManagedAddress,
        #[indexed] manager: &ManagedAddress,
        minimum_contribution: &BigUint,
    );

    #[event("campaignTemplateChanged")]
    fn campaign_template_changed_event(&self, #[indexed] campaign_template: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("campaignTemplate")]
    fn campaign_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("deployedCampaigns")]
    fn deployed_campaigns(&self) -> VecMapper<ManagedAddress>;
}
